// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration for assertions and the import smoke test.
//!
//! Both sections can be loaded from a TOML file:
//!
//! ```toml
//! [assert]
//! max_diff = 200
//! diff_context = 3
//!
//! [import]
//! check_header = false
//! script_suffix = ".rs"
//!
//! [import.packages]
//! extra = ["tools"]
//! exclude = ["^vendor"]
//! ```

use crate::env;
use crate::error::Error;
use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default cap on diff lines included in a failure message
pub const DEFAULT_MAX_DIFF: usize = 100;
/// Default lines of unchanged context around each change
pub const DEFAULT_DIFF_CONTEXT: usize = 5;
/// Default suffix a script needs to be loaded as a module
pub const DEFAULT_SCRIPT_SUFFIX: &str = ".rs";

fn default_max_diff() -> usize {
    DEFAULT_MAX_DIFF
}

fn default_diff_context() -> usize {
    DEFAULT_DIFF_CONTEXT
}

fn default_check_header() -> bool {
    true
}

fn default_script_suffix() -> String {
    DEFAULT_SCRIPT_SUFFIX.to_string()
}

/// Failure report settings for the enhanced equality assertion
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssertConfig {
    /// Maximum number of diff lines in a failure message
    #[serde(default = "default_max_diff")]
    pub max_diff: usize,

    /// Lines of context around each change
    #[serde(default = "default_diff_context")]
    pub diff_context: usize,
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            max_diff: DEFAULT_MAX_DIFF,
            diff_context: DEFAULT_DIFF_CONTEXT,
        }
    }
}

impl AssertConfig {
    /// Defaults, overridden by `TESTBENCH_MAX_DIFF` / `TESTBENCH_DIFF_CONTEXT`
    pub fn from_env() -> Self {
        Self::default().with_overrides(env::max_diff(), env::diff_context())
    }

    /// Replace the fields that have a value
    pub fn with_overrides(mut self, max_diff: Option<usize>, diff_context: Option<usize>) -> Self {
        if let Some(max_diff) = max_diff {
            self.max_diff = max_diff;
        }
        if let Some(diff_context) = diff_context {
            self.diff_context = diff_context;
        }
        self
    }
}

/// Extra entries and exclusion patterns for one discoverable collection
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Selection {
    /// Additional entries to test
    #[serde(default)]
    pub extra: Vec<String>,

    /// Regex patterns removing matching entries
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Selection {
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(exclude.into_iter().map(Into::into));
        self
    }

    /// Compile the exclusion patterns
    pub fn exclude_set(&self) -> Result<RegexSet, Error> {
        Ok(RegexSet::new(&self.exclude)?)
    }
}

/// Import smoke test settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ImportConfig {
    #[serde(default)]
    pub packages: Selection,

    #[serde(default)]
    pub modules: Selection,

    #[serde(default)]
    pub scripts: Selection,

    /// Run the header check on package files and scripts (default: true)
    #[serde(default = "default_check_header")]
    pub check_header: bool,

    /// Scripts without this suffix are skipped (default: ".rs")
    #[serde(default = "default_script_suffix")]
    pub script_suffix: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            packages: Selection::default(),
            modules: Selection::default(),
            scripts: Selection::default(),
            check_header: true,
            script_suffix: default_script_suffix(),
        }
    }
}

impl ImportConfig {
    pub fn with_check_header(mut self, check_header: bool) -> Self {
        self.check_header = check_header;
        self
    }

    fn validate(&self) -> Result<(), Error> {
        for (kind, selection) in [
            ("packages", &self.packages),
            ("modules", &self.modules),
            ("scripts", &self.scripts),
        ] {
            selection
                .exclude_set()
                .map_err(|e| Error::Config(format!("import.{}.exclude: {}", kind, e)))?;
        }
        if self.script_suffix.is_empty() {
            return Err(Error::Config(
                "import.script_suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration file
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TestbenchConfig {
    #[serde(default)]
    pub assert: AssertConfig,

    #[serde(default)]
    pub import: ImportConfig,
}

impl TestbenchConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(content)?;
        config.import.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
