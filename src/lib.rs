// psbuild
// Build invoker for the particle system demo: constructs and executes one
// compiler invocation from an overridable configuration

pub mod cli;
pub mod command;
pub mod config;
pub mod environment;
pub mod invoker;
pub mod manager;

// Re-export core types for convenience
pub use command::CompilerCommand;
pub use config::{BuildConfig, ConfigError};
pub use environment::{
    CompilerStatus, EnvironmentStatus, EnvironmentValidator, ValidationStatus,
};
pub use invoker::{BuildInvoker, BuildOutcome, InvokeError};
pub use manager::{BuildManager, BuildManagerError};
pub use cli::{run_cli, PsbuildCli, PsbuildCommand};
