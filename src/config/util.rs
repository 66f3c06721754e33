//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/news/  ← cwd
/// /home/user/site/newsmap.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("newsmap.toml");
        fs::write(&config, "").unwrap();
        let nested = dir.path().join("content").join("news");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_from(&nested, Path::new("newsmap.toml")).unwrap();
        assert_eq!(found, config);
    }

    #[test]
    fn test_find_config_absolute_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert_eq!(find_config_file(&missing), None);
    }

    #[test]
    fn test_find_config_absolute_present() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("custom.toml");
        fs::write(&config, "").unwrap();
        assert_eq!(find_config_file(&config), Some(config));
    }
}
