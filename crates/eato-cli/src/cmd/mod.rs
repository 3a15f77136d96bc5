pub mod carousel;
pub mod catalog;
pub mod check;
pub mod init;
pub mod layer;
pub mod schedule;
pub mod serve;
pub mod timeline;

use anyhow::Context;
use eato_core::{EatoError, Site};
use std::path::Path;

/// Load the project's content, or the built-in EatoSystems content when the
/// project has not been initialized.
pub fn load_site(root: &Path) -> anyhow::Result<Site> {
    match Site::load(root) {
        Ok(site) => Ok(site),
        Err(EatoError::NotInitialized) => {
            tracing::warn!(root = %root.display(), "no .eato/ found; using built-in content");
            Site::builtin().context("built-in content is invalid")
        }
        Err(e) => Err(e).context("failed to load site content"),
    }
}
