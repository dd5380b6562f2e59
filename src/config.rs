// Build configuration for the particle system build invoker

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

/// Build configuration for a single compiler invocation
///
/// Every field is overridable; the default configuration is the stock
/// macOS gcc invocation for the particle system demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Compiler executable, resolved on PATH or given as a path
    pub compiler: String,
    /// Preprocessor defines, emitted as `-D<name>`
    pub defines: Vec<String>,
    /// Frameworks to link, emitted as `-framework <name>` pairs
    pub frameworks: Vec<String>,
    /// Additional compiler flags, passed through before the source file
    pub extra_flags: Vec<String>,
    /// Translation unit to compile
    pub source_file: PathBuf,
    /// Output executable path, emitted after `-o`
    pub output: PathBuf,
    /// Libraries to link, emitted as `-l<name>`
    pub libraries: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: "gcc".to_string(),
            defines: vec!["MACOSX".to_string()],
            frameworks: vec![
                "OpenGL".to_string(),
                "GLUT".to_string(),
                "CoreFoundation".to_string(),
            ],
            extra_flags: Vec::new(),
            source_file: PathBuf::from("particleSystem.c"),
            output: PathBuf::from("particleSystem"),
            libraries: vec!["SOIL".to_string()],
        }
    }
}

impl BuildConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(path.to_path_buf(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(path.to_path_buf(), e))
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeFailed(e))?;
        fs::write(path, content)
            .map_err(|e| ConfigError::WriteFailed(path.to_path_buf(), e))
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    ReadFailed(PathBuf, std::io::Error),
    WriteFailed(PathBuf, std::io::Error),
    ParseFailed(PathBuf, serde_json::Error),
    SerializeFailed(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadFailed(path, err) => {
                write!(f, "Failed to read config file {}: {}", path.display(), err)
            }
            ConfigError::WriteFailed(path, err) => {
                write!(f, "Failed to write config file {}: {}", path.display(), err)
            }
            ConfigError::ParseFailed(path, err) => {
                write!(f, "Failed to parse config file {}: {}", path.display(), err)
            }
            ConfigError::SerializeFailed(err) => {
                write!(f, "Failed to serialize configuration: {}", err)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_the_stock_gcc_invocation() {
        let config = BuildConfig::default();
        assert_eq!(config.compiler, "gcc");
        assert_eq!(config.defines, vec!["MACOSX"]);
        assert_eq!(config.frameworks, vec!["OpenGL", "GLUT", "CoreFoundation"]);
        assert!(config.extra_flags.is_empty());
        assert_eq!(config.source_file, PathBuf::from("particleSystem.c"));
        assert_eq!(config.output, PathBuf::from("particleSystem"));
        assert_eq!(config.libraries, vec!["SOIL"]);
    }

    #[test]
    fn test_config_json_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("psbuild.json");

        let mut config = BuildConfig::default();
        config.compiler = "clang".to_string();
        config.extra_flags.push("-Wall".to_string());

        config.save(&config_path).unwrap();
        let loaded = BuildConfig::load(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.json");

        assert!(matches!(
            BuildConfig::load(&missing),
            Err(ConfigError::ReadFailed(_, _))
        ));
    }

    #[test]
    fn test_load_malformed_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.json");
        std::fs::write(&config_path, "{ not json").unwrap();

        assert!(matches!(
            BuildConfig::load(&config_path),
            Err(ConfigError::ParseFailed(_, _))
        ));
    }
}
