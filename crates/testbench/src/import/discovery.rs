// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery of the packages, modules and scripts to smoke test.

use crate::config::Selection;
use crate::error::Error;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Source of the units an [`ImportTest`](super::ImportTest) loads.
///
/// Each listing applies the selection: its `extra` entries are added and
/// entries matching any `exclude` pattern are removed.
pub trait Discovery {
    fn packages(&self, selection: &Selection) -> Result<Vec<String>, Error>;

    fn modules(&self, selection: &Selection) -> Result<Vec<String>, Error>;

    /// Script paths, relative to [`Discovery::base_dir`]
    fn scripts(&self, selection: &Selection) -> Result<Vec<String>, Error>;

    /// Files attributed to `package`, relative to [`Discovery::base_dir`]
    fn files_in_package(&self, package: &str) -> Vec<PathBuf>;

    /// Directory relative file references resolve against
    fn base_dir(&self) -> &Path;
}

/// In-memory [`Discovery`] built from explicit listings.
///
/// ```
/// use testbench::{Catalog, Discovery, Selection};
///
/// let catalog = Catalog::new("/repo")
///     .with_package("core", ["core/lib.rs"])
///     .with_package("vendor_zlib", ["vendor/zlib.rs"]);
/// let selection = Selection::default().with_exclude(["^vendor"]);
/// assert_eq!(catalog.packages(&selection).unwrap(), vec!["core"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    base_dir: PathBuf,
    packages: BTreeMap<String, Vec<PathBuf>>,
    modules: BTreeSet<String>,
    scripts: BTreeSet<String>,
}

impl Catalog {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_package<I, P>(mut self, name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.packages
            .entry(name.into())
            .or_default()
            .extend(files.into_iter().map(Into::into));
        self
    }

    pub fn with_module(mut self, name: impl Into<String>) -> Self {
        self.modules.insert(name.into());
        self
    }

    pub fn with_script(mut self, path: impl Into<String>) -> Self {
        self.scripts.insert(path.into());
        self
    }
}

/// Add extras, drop excluded entries, sort and deduplicate
fn select<'a>(
    found: impl Iterator<Item = &'a String>,
    selection: &'a Selection,
) -> Result<Vec<String>, Error> {
    let exclude = selection.exclude_set()?;
    let selected: BTreeSet<&String> = found
        .chain(selection.extra.iter())
        .filter(|name| !exclude.is_match(name))
        .collect();
    Ok(selected.into_iter().cloned().collect())
}

impl Discovery for Catalog {
    fn packages(&self, selection: &Selection) -> Result<Vec<String>, Error> {
        select(self.packages.keys(), selection)
    }

    fn modules(&self, selection: &Selection) -> Result<Vec<String>, Error> {
        select(self.modules.iter(), selection)
    }

    fn scripts(&self, selection: &Selection) -> Result<Vec<String>, Error> {
        select(self.scripts.iter(), selection)
    }

    fn files_in_package(&self, package: &str) -> Vec<PathBuf> {
        self.packages.get(package).cloned().unwrap_or_default()
    }

    fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
