// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading of discovered units.

use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Boxed error raised by a unit's initializer
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when loading a unit
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing is known under this name
    #[error("No module named '{0}'")]
    NotFound(String),

    /// The unit exists but failed while loading
    #[error("Failed to load '{name}': {source}")]
    Failed {
        name: String,
        #[source]
        source: BoxError,
    },
}

/// Loads units by name and remembers which ones are loaded
pub trait Loader {
    fn load(&mut self, name: &str) -> Result<(), LoadError>;

    fn is_loaded(&self, name: &str) -> bool;
}

type Initializer = Box<dyn Fn() -> Result<(), BoxError> + Send + Sync>;

/// In-memory [`Loader`]: units are registered with an initializer that runs
/// on first load.
#[derive(Default)]
pub struct ModuleRegistry {
    units: BTreeMap<String, Initializer>,
    loaded: BTreeSet<String>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit whose initializer may fail
    pub fn register<F>(mut self, name: impl Into<String>, init: F) -> Self
    where
        F: Fn() -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.units.insert(name.into(), Box::new(init));
        self
    }

    /// Register a unit that always loads
    pub fn register_ok(self, name: impl Into<String>) -> Self {
        self.register(name, || Ok(()))
    }

    /// Names loaded so far
    pub fn loaded(&self) -> impl Iterator<Item = &str> {
        self.loaded.iter().map(String::as_str)
    }
}

impl Loader for ModuleRegistry {
    fn load(&mut self, name: &str) -> Result<(), LoadError> {
        if self.loaded.contains(name) {
            return Ok(());
        }
        let init = self
            .units
            .get(name)
            .ok_or_else(|| LoadError::NotFound(name.to_string()))?;
        init().map_err(|source| LoadError::Failed {
            name: name.to_string(),
            source,
        })?;
        self.loaded.insert(name.to_string());
        Ok(())
    }

    fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains(name)
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("units", &self.units.keys().collect::<Vec<_>>())
            .field("loaded", &self.loaded)
            .finish()
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
