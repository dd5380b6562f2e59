// Build invoker: spawns the configured compiler exactly once
// The build path performs no validation; toolchain failures pass through verbatim

use crate::command::CompilerCommand;
use crate::config::BuildConfig;
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};
use serde::{Deserialize, Serialize};

/// Executes a single compiler invocation and reports the outcome
pub struct BuildInvoker {
    config: BuildConfig,
}

impl BuildInvoker {
    /// Create an invoker with the default configuration
    pub fn new() -> Self {
        Self {
            config: BuildConfig::default(),
        }
    }

    /// Create an invoker with a custom configuration
    pub fn with_config(config: BuildConfig) -> Self {
        Self { config }
    }

    /// The command this invoker will execute
    pub fn command(&self) -> CompilerCommand {
        CompilerCommand::from_config(&self.config)
    }

    /// Spawn the compiler, wait for it, and capture the outcome
    ///
    /// Does not check that the source file exists, that the compiler is
    /// installed, or that frameworks and libraries resolve; those failures
    /// surface as the toolchain's own diagnostics and exit code in the
    /// returned outcome. An `Err` is produced only when the child process
    /// cannot be spawned at all.
    pub fn invoke(&self) -> Result<BuildOutcome, InvokeError> {
        let command = self.command();
        let start_time = Instant::now();

        let output = Command::new(command.program())
            .args(command.args())
            .output()
            .map_err(|e| InvokeError::CompilerSpawnFailed {
                compiler: command.program().to_string(),
                source: e,
            })?;

        Ok(BuildOutcome {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: start_time.elapsed(),
            executable: self.config.output.clone(),
        })
    }

    /// Current configuration
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }
}

impl Default for BuildInvoker {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured result of one compiler invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildOutcome {
    /// Whether the compiler exited with status zero
    pub success: bool,
    /// Child exit code; -1 when terminated by a signal
    pub exit_code: i32,
    /// Compiler stdout, verbatim
    pub stdout: String,
    /// Compiler stderr, verbatim
    pub stderr: String,
    /// Wall-clock time of the invocation
    pub duration: Duration,
    /// Configured output path; only meaningful when `success` is true
    pub executable: PathBuf,
}

/// Errors at the spawn boundary
///
/// Everything past a successful spawn is reported through `BuildOutcome`,
/// never as an error.
#[derive(Debug)]
pub enum InvokeError {
    CompilerSpawnFailed {
        compiler: String,
        source: std::io::Error,
    },
}

impl InvokeError {
    /// Whether the failure is the command-not-found class
    pub fn is_not_found(&self) -> bool {
        match self {
            InvokeError::CompilerSpawnFailed { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
        }
    }
}

impl std::fmt::Display for InvokeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvokeError::CompilerSpawnFailed { compiler, source } => {
                write!(f, "Failed to run compiler '{}': {}", compiler, source)
            }
        }
    }
}

impl std::error::Error for InvokeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoker_uses_default_config() {
        let invoker = BuildInvoker::new();
        assert_eq!(invoker.config().compiler, "gcc");
        assert_eq!(
            invoker.command().command_line(),
            "gcc -DMACOSX -framework OpenGL -framework GLUT -framework CoreFoundation particleSystem.c -o particleSystem -lSOIL"
        );
    }

    #[test]
    fn test_unresolvable_compiler_is_a_spawn_error() {
        let mut config = BuildConfig::default();
        config.compiler = "psbuild-no-such-compiler".to_string();

        let invoker = BuildInvoker::with_config(config);
        match invoker.invoke() {
            Err(err) => assert!(err.is_not_found()),
            Ok(outcome) => panic!("expected spawn failure, got exit code {}", outcome.exit_code),
        }
    }
}
