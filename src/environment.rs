// Environment validation for the build invoker
// Opt-in doctor checks; the build path itself never validates anything

use crate::config::BuildConfig;
use std::process::Command;
use serde::{Deserialize, Serialize};

/// Validates that the configured toolchain and inputs are present
pub struct EnvironmentValidator;

impl EnvironmentValidator {
    /// Create new environment validator
    pub fn new() -> Self {
        Self
    }

    /// Validate the build environment for a given configuration
    pub fn validate(&self, config: &BuildConfig) -> EnvironmentStatus {
        let compiler = self.probe_compiler(&config.compiler);
        let source_present = config.source_file.exists();

        let overall_status = if compiler.available && source_present {
            ValidationStatus::Valid
        } else if compiler.available || source_present {
            ValidationStatus::PartiallyValid
        } else {
            ValidationStatus::Invalid
        };

        EnvironmentStatus {
            compiler,
            source_file: config.source_file.display().to_string(),
            source_present,
            overall_status,
        }
    }

    /// Probe the compiler with `--version`
    ///
    /// Frameworks and libraries are deliberately not probed; only the
    /// linker can resolve those, and their absence surfaces through the
    /// invocation itself.
    fn probe_compiler(&self, compiler: &str) -> CompilerStatus {
        let output = Command::new(compiler).arg("--version").output();

        match output {
            Ok(output) if output.status.success() => {
                let version_str = String::from_utf8_lossy(&output.stdout);
                CompilerStatus {
                    name: compiler.to_string(),
                    available: true,
                    version: version_str.lines().next().map(str::to_string),
                }
            }
            Ok(_) => CompilerStatus {
                name: compiler.to_string(),
                available: true,
                version: None,
            },
            Err(_) => CompilerStatus {
                name: compiler.to_string(),
                available: false,
                version: None,
            },
        }
    }
}

impl Default for EnvironmentValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Overall environment status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentStatus {
    pub compiler: CompilerStatus,
    pub source_file: String,
    pub source_present: bool,
    pub overall_status: ValidationStatus,
}

impl EnvironmentStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self.overall_status, ValidationStatus::Valid)
    }
}

/// Compiler availability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerStatus {
    pub name: String,
    pub available: bool,
    pub version: Option<String>,
}

/// Validation status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    Valid,
    PartiallyValid,
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_missing_compiler_and_source_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let config = BuildConfig {
            compiler: "psbuild-no-such-compiler".to_string(),
            source_file: temp_dir.path().join("missing.c"),
            ..BuildConfig::default()
        };

        let status = EnvironmentValidator::new().validate(&config);
        assert!(!status.compiler.available);
        assert!(!status.source_present);
        assert_eq!(status.overall_status, ValidationStatus::Invalid);
        assert!(!status.is_valid());
    }

    #[test]
    fn test_present_source_with_missing_compiler_is_partial() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("particleSystem.c");
        std::fs::write(&source, "int main(void) { return 0; }\n").unwrap();

        let config = BuildConfig {
            compiler: "psbuild-no-such-compiler".to_string(),
            source_file: source,
            ..BuildConfig::default()
        };

        let status = EnvironmentValidator::new().validate(&config);
        assert!(status.source_present);
        assert_eq!(status.overall_status, ValidationStatus::PartiallyValid);
    }

    #[test]
    fn test_compiler_probe_reports_name() {
        let config = BuildConfig {
            compiler: "psbuild-no-such-compiler".to_string(),
            source_file: PathBuf::from("particleSystem.c"),
            ..BuildConfig::default()
        };

        let status = EnvironmentValidator::new().validate(&config);
        assert_eq!(status.compiler.name, "psbuild-no-such-compiler");
        assert!(status.compiler.version.is_none());
    }
}
