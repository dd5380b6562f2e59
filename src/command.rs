// Structured compiler command construction
// Replaces shell string concatenation with an explicit ordered argument list

use crate::config::BuildConfig;

/// A fully assembled compiler command: one program plus an ordered argv
///
/// Argument order is fixed: defines, frameworks, extra flags, source file,
/// `-o` output, libraries. Nothing is reordered, deduplicated, or quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerCommand {
    program: String,
    args: Vec<String>,
}

impl CompilerCommand {
    /// Assemble the argument list from a build configuration
    pub fn from_config(config: &BuildConfig) -> Self {
        let mut args = Vec::new();

        for define in &config.defines {
            args.push(format!("-D{}", define));
        }

        for framework in &config.frameworks {
            args.push("-framework".to_string());
            args.push(framework.clone());
        }

        for flag in &config.extra_flags {
            args.push(flag.clone());
        }

        args.push(config.source_file.to_string_lossy().to_string());
        args.push("-o".to_string());
        args.push(config.output.to_string_lossy().to_string());

        for library in &config.libraries {
            args.push(format!("-l{}", library));
        }

        Self {
            program: config.compiler.clone(),
            args,
        }
    }

    /// Program name, for the process-execution facility
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Ordered argument list, for the process-execution facility
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Render the command as a single display string
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
