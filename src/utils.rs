//! Utility functions for directory management
//!
//! Follows the XDG Base Directory specification:
//!
//! - Config: `~/.config/folio/` - Optional read-only `config.json`
//! - State: `~/.local/state/folio/` - Log file
//!
//! # Example
//!
//! ```
//! use folio::utils::{ensure_state_dir, get_state_dir};
//!
//! ensure_state_dir().expect("Failed to create state directory");
//!
//! if let Some(state_path) = get_state_dir() {
//!     // Write logs under state_path
//! }
//! ```

use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "folio", "folio")
}

pub fn get_config_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| pd.config_dir().to_path_buf())
}

pub fn get_state_dir() -> Option<PathBuf> {
    project_dirs().and_then(|pd| pd.state_dir().map(std::path::Path::to_path_buf))
}

pub fn ensure_state_dir() -> std::io::Result<()> {
    let Some(dir) = get_state_dir() else {
        return Ok(());
    };

    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        DirBuilder::new().mode(0o700).recursive(true).create(dir)?;
    }

    #[cfg(not(unix))]
    {
        std::fs::create_dir_all(dir)?;
    }

    Ok(())
}

/// Truncates a string to a maximum number of characters, adding an ellipsis if needed
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_string("React", 10), "React");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_string("Personal blog platform", 10), "Persona...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_string("ééééééééééé", 6), "ééé...");
    }
}
