//! Configuration file loading for the millrace CLI.
//!
//! An explicitly passed path must exist and parse; the default location
//! (the platform config directory) is optional and silently falls back to
//! the built-in defaults when absent.

use std::{fs, path::PathBuf};

use directories::ProjectDirs;
use log::debug;

use millrace::{MillraceError, config::AppConfig};

/// Load the application configuration.
///
/// # Errors
///
/// Returns `MillraceError::Io` when an explicitly given file cannot be
/// read, and `MillraceError::Config` when a file does not parse as TOML.
pub fn load_config(path: Option<&String>) -> Result<AppConfig, MillraceError> {
    let path = match path {
        Some(path) => PathBuf::from(path),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No configuration file found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    debug!(path = path.display().to_string(); "Loading configuration");
    let source = fs::read_to_string(&path)?;
    toml::from_str(&source)
        .map_err(|err| MillraceError::Config(format!("{}: {err}", path.display())))
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "millrace").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[conversion]\nstrict = true").expect("write config");

        let path = file.path().to_string_lossy().to_string();
        let config = load_config(Some(&path)).expect("config should load");
        assert!(config.conversion().strict());
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let path = "/nonexistent/millrace.toml".to_string();
        assert!(matches!(
            load_config(Some(&path)),
            Err(MillraceError::Io(_))
        ));
    }

    #[test]
    fn malformed_config_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "not valid toml [[[").expect("write config");

        let path = file.path().to_string_lossy().to_string();
        assert!(matches!(
            load_config(Some(&path)),
            Err(MillraceError::Config(_))
        ));
    }
}
