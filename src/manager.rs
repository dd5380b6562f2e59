// Build manager for the particle system build invoker
// Ties configuration, command construction, invocation, and validation together

use crate::config::{BuildConfig, ConfigError};
use crate::environment::{EnvironmentStatus, EnvironmentValidator};
use crate::invoker::{BuildInvoker, BuildOutcome, InvokeError};
use std::path::Path;

/// Main build manager
pub struct BuildManager {
    config: BuildConfig,
    environment_validator: EnvironmentValidator,
}

impl BuildManager {
    /// Create new build manager with default configuration
    pub fn new() -> Self {
        Self {
            config: BuildConfig::default(),
            environment_validator: EnvironmentValidator::new(),
        }
    }

    /// Create build manager with custom configuration
    pub fn with_config(config: BuildConfig) -> Self {
        Self {
            config,
            environment_validator: EnvironmentValidator::new(),
        }
    }

    /// Create build manager from a JSON configuration file
    pub fn from_config_file(path: &Path) -> Result<Self, BuildManagerError> {
        let config = BuildConfig::load(path).map_err(BuildManagerError::Configuration)?;
        Ok(Self::with_config(config))
    }

    /// Run the compiler invocation and capture its outcome
    ///
    /// Delegates to the invoker unconditionally; no environment check is
    /// performed here.
    pub fn build(&self) -> Result<BuildOutcome, BuildManagerError> {
        BuildInvoker::with_config(self.config.clone())
            .invoke()
            .map_err(BuildManagerError::Invocation)
    }

    /// Check the build environment without building
    pub fn check_environment(&self) -> EnvironmentStatus {
        self.environment_validator.validate(&self.config)
    }

    /// Render the exact command line that `build` would execute
    pub fn render_command(&self) -> String {
        BuildInvoker::with_config(self.config.clone())
            .command()
            .command_line()
    }

    /// Get current configuration
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Update configuration
    pub fn update_config(&mut self, config: BuildConfig) {
        self.config = config;
    }
}

impl Default for BuildManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Build manager errors
#[derive(Debug)]
pub enum BuildManagerError {
    Configuration(ConfigError),
    Invocation(InvokeError),
}

impl std::fmt::Display for BuildManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildManagerError::Configuration(err) => write!(f, "Configuration error: {}", err),
            BuildManagerError::Invocation(err) => write!(f, "Invocation error: {}", err),
        }
    }
}

impl std::error::Error for BuildManagerError {}
