//! Configuration loading from files.
//!
//! This module handles reading and parsing configuration files.

use std::path::{Path, PathBuf};

use super::{Config, ConfigError};

/// Config file picked up from the working directory when none is given.
const DEFAULT_CONFIG_FILE: &str = "mdpress.yaml";

impl Config {
    /// Load the config from the command line argument.
    ///
    /// An explicit file must exist. Without one, `mdpress.yaml` is used if
    /// present and the built-in defaults otherwise.
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        match config_file {
            Some(path) => Self::load_from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_file(path)
                } else {
                    log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load the config from a file path.
    ///
    /// Relative `input` and `output` paths are resolved against the
    /// directory containing the config file.
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        let base_path = base_path_from_config(path);
        config.input = resolve_relative(&config.input, &base_path);
        config.output = resolve_relative(&config.output, &base_path);

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Get the base path from a config file path (its parent directory).
fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_default()
}

fn resolve_relative(path: &Path, base_path: &Path) -> PathBuf {
    if path.is_relative() {
        base_path.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_resolves_paths_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("mdpress.yaml");
        std::fs::write(
            &config_path,
            "input: docs/notes.md\noutput: /tmp/notes.html\ndocument:\n  title: Notes\n",
        )
        .unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.input, dir.path().join("docs/notes.md"));
        assert_eq!(config.output, PathBuf::from("/tmp/notes.html"));
        assert_eq!(config.document.title, "Notes");
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("mdpress.yaml");
        std::fs::write(&config_path, "\n").unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.input, dir.path().join("prd.md"));
        assert_eq!(config.output, dir.path().join("prd.html"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");

        let result = Config::load_from_arg(Some(missing.as_path()));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("mdpress.yaml");
        std::fs::write(&config_path, "markdown:\n  extensions: tables\n").unwrap();

        let result = Config::load_from_file(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_base_path_from_bare_file_name() {
        assert_eq!(base_path_from_config(Path::new("mdpress.yaml")), PathBuf::new());
        assert_eq!(
            resolve_relative(Path::new("prd.md"), &PathBuf::new()),
            PathBuf::from("prd.md")
        );
    }
}
