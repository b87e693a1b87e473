// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Header compliance check seam.

use crate::error::Error;
use std::path::Path;

/// Checks the leading license/attribution block of a source file.
///
/// Returns `Ok(None)` when the file is compliant and `Ok(Some(reason))` when
/// it is not. `script` selects the conventions for executable scripts rather
/// than library files; `write` asks the check to fix the header in place,
/// which the smoke test never does.
pub trait HeaderCheck {
    fn check(&self, path: &Path, script: bool, write: bool) -> Result<Option<String>, Error>;
}

impl<F> HeaderCheck for F
where
    F: Fn(&Path, bool, bool) -> Result<Option<String>, Error>,
{
    fn check(&self, path: &Path, script: bool, write: bool) -> Result<Option<String>, Error> {
        self(path, script, write)
    }
}
