// psbuild binary
// Entry point for the particle system build invoker

use psbuild::cli::run_cli;

fn main() {
    let exit_code = run_cli();
    std::process::exit(exit_code);
}
