// Command-line interface for the particle system build invoker

use crate::config::BuildConfig;
use crate::manager::{BuildManager, BuildManagerError};
use std::io::{self, Write};
use std::path::PathBuf;
use clap::{Parser, Subcommand};
use colored::*;

/// Particle system build CLI
#[derive(Parser)]
#[command(name = "psbuild")]
#[command(about = "Build invoker for the particle system demo")]
#[command(version = "0.1.0")]
pub struct PsbuildCli {
    #[command(subcommand)]
    pub command: PsbuildCommand,
}

#[derive(Subcommand)]
pub enum PsbuildCommand {
    /// Run the compiler invocation
    Build {
        /// Configuration file path
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Override the compiler executable
        #[arg(long)]
        compiler: Option<String>,

        /// Override the source file
        #[arg(long)]
        source: Option<PathBuf>,

        /// Override the output path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the command line before executing it
        #[arg(long)]
        show_command: bool,
    },

    /// Print the exact command line without executing it
    ShowCommand {
        /// Configuration file path
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Check that the compiler and source file are present
    Doctor {
        /// Configuration file path
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Write the default configuration to a JSON file
    InitConfig {
        /// Destination path
        #[arg(default_value = "psbuild.json")]
        path: PathBuf,
    },
}

/// Run the CLI and return the process exit code
pub fn run_cli() -> i32 {
    let cli = PsbuildCli::parse();
    execute_command(cli.command)
}

fn execute_command(command: PsbuildCommand) -> i32 {
    match command {
        PsbuildCommand::Build {
            config,
            compiler,
            source,
            output,
            show_command,
        } => handle_build(config, compiler, source, output, show_command),
        PsbuildCommand::ShowCommand { config } => handle_show_command(config),
        PsbuildCommand::Doctor { config } => handle_doctor(config),
        PsbuildCommand::InitConfig { path } => handle_init_config(path),
    }
}

fn handle_build(
    config_path: Option<PathBuf>,
    compiler: Option<String>,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    show_command: bool,
) -> i32 {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(code) => return code,
    };

    if let Some(compiler) = compiler {
        config.compiler = compiler;
    }
    if let Some(source) = source {
        config.source_file = source;
    }
    if let Some(output) = output {
        config.output = output;
    }

    let manager = BuildManager::with_config(config);

    if show_command {
        println!("{} {}", "Running:".cyan().bold(), manager.render_command());
    }

    match manager.build() {
        Ok(outcome) => {
            // Compiler output passes through verbatim
            print!("{}", outcome.stdout);
            eprint!("{}", outcome.stderr);
            let _ = io::stdout().flush();
            let _ = io::stderr().flush();

            if outcome.success {
                println!(
                    "{} {} ({:.2}s)",
                    "Built".green().bold(),
                    outcome.executable.display(),
                    outcome.duration.as_secs_f64()
                );
            }
            outcome.exit_code
        }
        Err(BuildManagerError::Invocation(err)) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            // Mirror the shell's command-not-found status
            if err.is_not_found() {
                127
            } else {
                1
            }
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            1
        }
    }
}

fn handle_show_command(config_path: Option<PathBuf>) -> i32 {
    match load_config(config_path) {
        Ok(config) => {
            println!("{}", BuildManager::with_config(config).render_command());
            0
        }
        Err(code) => code,
    }
}

fn handle_doctor(config_path: Option<PathBuf>) -> i32 {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let manager = BuildManager::with_config(config);
    let status = manager.check_environment();

    if status.compiler.available {
        let version = status.compiler.version.as_deref().unwrap_or("unknown version");
        println!("{} compiler '{}' ({})", "ok:".green().bold(), status.compiler.name, version);
    } else {
        println!(
            "{} compiler '{}' not resolvable on PATH",
            "missing:".red().bold(),
            status.compiler.name
        );
    }

    if status.source_present {
        println!("{} source file '{}'", "ok:".green().bold(), status.source_file);
    } else {
        println!("{} source file '{}'", "missing:".red().bold(), status.source_file);
    }

    if status.is_valid() {
        println!("{}", "Environment is ready.".green());
        0
    } else {
        println!("{}", "Environment is not ready.".red());
        1
    }
}

fn handle_init_config(path: PathBuf) -> i32 {
    match BuildConfig::default().save(&path) {
        Ok(()) => {
            println!("{} {}", "Wrote".green().bold(), path.display());
            0
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            1
        }
    }
}

fn load_config(config_path: Option<PathBuf>) -> Result<BuildConfig, i32> {
    match config_path {
        Some(path) => BuildConfig::load(&path).map_err(|err| {
            eprintln!("{} {}", "error:".red().bold(), err);
            1
        }),
        None => Ok(BuildConfig::default()),
    }
}
