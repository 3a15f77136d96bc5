use crate::error::{EatoError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const EATO_DIR: &str = ".eato";

pub const CONFIG_FILE: &str = ".eato/config.yaml";
pub const CATALOG_FILE: &str = ".eato/catalog.yaml";
pub const SCHEDULE_FILE: &str = ".eato/schedule.yaml";
pub const CAROUSELS_FILE: &str = ".eato/carousels.yaml";

pub const PUBLIC_DIR: &str = "public";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn eato_dir(root: &Path) -> PathBuf {
    root.join(EATO_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn catalog_path(root: &Path) -> PathBuf {
    root.join(CATALOG_FILE)
}

pub fn schedule_path(root: &Path) -> PathBuf {
    root.join(SCHEDULE_FILE)
}

pub fn carousels_path(root: &Path) -> PathBuf {
    root.join(CAROUSELS_FILE)
}

// ---------------------------------------------------------------------------
// Slug validation
// ---------------------------------------------------------------------------

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").expect("slug regex is valid")
    })
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= 64 && slug_re().is_match(slug)
}

pub fn validate_slug(slug: &str) -> Result<()> {
    if !is_valid_slug(slug) {
        return Err(EatoError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_slugs() {
        for slug in ["eatoglobal", "a", "framework-steps", "x1"] {
            validate_slug(slug).unwrap_or_else(|_| panic!("expected valid: {slug}"));
        }
    }

    #[test]
    fn invalid_slugs() {
        for slug in ["", "-eato", "eato-", "has spaces", "EatoGlobal", "a_b"] {
            assert!(validate_slug(slug).is_err(), "expected invalid: {slug}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/site");
        assert_eq!(config_path(root), PathBuf::from("/tmp/site/.eato/config.yaml"));
        assert_eq!(
            schedule_path(root),
            PathBuf::from("/tmp/site/.eato/schedule.yaml")
        );
        assert_eq!(eato_dir(root), PathBuf::from("/tmp/site/.eato"));
    }
}
