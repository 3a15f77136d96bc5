use std::path::{Path, PathBuf};

/// Resolve the project root.
///
/// Priority:
/// 1. `--root` flag / `EATO_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.eato/`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_upward(&cwd, eato_core::paths::EATO_DIR)
        .or_else(|| find_upward(&cwd, ".git"))
        .unwrap_or(cwd)
}

/// Nearest ancestor of `start` (inclusive) containing a `marker` directory.
fn find_upward(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_root(Some(dir.path())), dir.path());
    }

    #[test]
    fn finds_eato_dir_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".eato")).unwrap();
        let deep = dir.path().join("public/images/systems");
        std::fs::create_dir_all(&deep).unwrap();
        assert_eq!(find_upward(&deep, ".eato").as_deref(), Some(dir.path()));
    }

    #[test]
    fn eato_dir_preferred_over_git() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let site = dir.path().join("site");
        std::fs::create_dir_all(site.join(".eato")).unwrap();
        assert_eq!(find_upward(&site, ".eato").as_deref(), Some(site.as_path()));
        assert_eq!(find_upward(&site, ".git").as_deref(), Some(dir.path()));
    }

    #[test]
    fn no_marker_found() {
        let dir = TempDir::new().unwrap();
        assert!(find_upward(dir.path(), "no-such-marker-dir").is_none());
    }
}
