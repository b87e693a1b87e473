// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Import smoke test.
//!
//! Loads every discoverable package, module and script to catch load-time
//! errors, and optionally checks the header of every file involved. A unit
//! that cannot be found is a test failure naming it; any other load error
//! is handed back unchanged.

mod discovery;
mod header;
mod loader;

pub use discovery::{Catalog, Discovery};
pub use header::HeaderCheck;
pub use loader::{BoxError, LoadError, Loader, ModuleRegistry};

use crate::config::ImportConfig;
use crate::error::{self, Error, Failure};
use std::path::Path;
use tracing::{debug, warn};

/// Smoke test over the units a [`Discovery`] reports
#[derive(Debug)]
pub struct ImportTest<D, L, H> {
    config: ImportConfig,
    discovery: D,
    loader: L,
    header_check: H,
}

impl<D, L, H> ImportTest<D, L, H>
where
    D: Discovery,
    L: Loader,
    H: HeaderCheck,
{
    pub fn new(config: ImportConfig, discovery: D, loader: L, header_check: H) -> Self {
        Self {
            config,
            discovery,
            loader,
            header_check,
        }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Load one unit; only a missing unit or dependency counts as a failure
    fn import(&mut self, kind: &str, name: &str) -> Result<(), Error> {
        debug!(kind, name, "loading");
        let detail = match self.loader.load(name) {
            Ok(()) => None,
            Err(LoadError::NotFound(missing)) => Some(format!("no unit named '{}'", missing)),
            Err(err) => match missing_dependency(&err) {
                Some(missing) => Some(format!("missing dependency '{}'", missing)),
                None => {
                    warn!(kind, name, error = %err, "load raised");
                    return Err(Error::Unexpected(err.into()));
                }
            },
        };

        if self.loader.is_loaded(name) {
            return Ok(());
        }
        let detail = detail.unwrap_or_else(|| "not registered as loaded".to_string());
        warn!(kind, name, %detail, "load failed");
        Err(Failure::new(format!("import of {} {} failed: {}", kind, name, detail)).into())
    }

    /// Run the header check on `file` (relative to the base directory)
    fn check_header(&self, file: &Path, script: bool) -> Result<(), Error> {
        let path = self.discovery.base_dir().join(file);
        match self.header_check.check(&path, script, false)? {
            None => Ok(()),
            Some(reason) => {
                warn!(file = %file.display(), %reason, "header check failed");
                Err(Failure::new(format!("check_header of {}: {}", file.display(), reason)).into())
            }
        }
    }

    /// Load each package, then check the header of each of its files
    pub fn check_import_packages(&mut self) -> Result<(), Error> {
        for package in self.discovery.packages(&self.config.packages)? {
            self.import("package", &package)?;

            if self.config.check_header {
                for file in self.discovery.files_in_package(&package) {
                    self.check_header(&file, false)?;
                }
            }
        }
        Ok(())
    }

    /// Load each module
    pub fn check_import_modules(&mut self) -> Result<(), Error> {
        for module in self.discovery.modules(&self.config.modules)? {
            self.import("module", &module)?;
        }
        Ok(())
    }

    /// Load each script carrying the script suffix as a module named after
    /// its file stem, then check its header
    pub fn check_import_scripts(&mut self) -> Result<(), Error> {
        for script in self.discovery.scripts(&self.config.scripts)? {
            let Some(module) = script_module_name(&script, &self.config.script_suffix) else {
                debug!(%script, "skipping script without source suffix");
                continue;
            };
            self.import("script", &module)?;

            if self.config.check_header {
                self.check_header(Path::new(&script), true)?;
            }
        }
        Ok(())
    }

    /// Packages, then modules, then scripts
    pub fn check_all(&mut self) -> Result<(), Error> {
        self.check_import_packages()?;
        self.check_import_modules()?;
        self.check_import_scripts()
    }

    /// [`ImportTest::check_import_packages`], failing the test on a failure
    pub fn test_import_packages(&mut self) -> anyhow::Result<()> {
        self.check_import_packages().map_err(error::raise)
    }

    /// [`ImportTest::check_import_modules`], failing the test on a failure
    pub fn test_import_modules(&mut self) -> anyhow::Result<()> {
        self.check_import_modules().map_err(error::raise)
    }

    /// [`ImportTest::check_import_scripts`], failing the test on a failure
    pub fn test_import_scripts(&mut self) -> anyhow::Result<()> {
        self.check_import_scripts().map_err(error::raise)
    }

    /// [`ImportTest::check_all`], failing the test on a failure
    pub fn run_all(&mut self) -> anyhow::Result<()> {
        self.check_all().map_err(error::raise)
    }
}

/// Name of a unit reported missing further down the error's source chain
fn missing_dependency(err: &LoadError) -> Option<String> {
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        if let Some(LoadError::NotFound(missing)) = cause.downcast_ref::<LoadError>() {
            return Some(missing.clone());
        }
        source = cause.source();
    }
    None
}

/// Module name of a script: file name without directories and suffix.
/// `None` when the script lacks the suffix.
fn script_module_name(script: &str, suffix: &str) -> Option<String> {
    let file_name = Path::new(script).file_name()?.to_str()?;
    let stem = file_name.strip_suffix(suffix)?;
    (!stem.is_empty()).then(|| stem.to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
