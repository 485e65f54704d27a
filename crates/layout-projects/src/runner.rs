//! External command execution
//!
//! Every tool the pipeline shells out to (`git clone`, `go mod edit`,
//! `go mod tidy`) goes through [`CommandRunner`] so tests can substitute a
//! recording fake for the real process spawner.

use crate::error::{Error, Result};
use camino::Utf8Path;
use std::process::Command;
use tracing::debug;

/// Captured result of an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command exited with status zero
    pub success: bool,
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Stdout followed by stderr
    pub combined: String,
}

impl CommandOutput {
    /// Successful output with the given text
    pub fn ok(combined: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            combined: combined.into(),
        }
    }

    /// Failed output with the given exit code and text
    pub fn failed(code: i32, combined: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            combined: combined.into(),
        }
    }

    /// Combined output with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.combined.trim()
    }
}

/// Runs external programs and captures their output
pub trait CommandRunner {
    /// Run `program` with `args`, optionally inside `cwd`, blocking until it exits
    ///
    /// A non-zero exit is reported through [`CommandOutput::success`];
    /// only a failure to start the process is an error.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Utf8Path>) -> Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Utf8Path>) -> Result<CommandOutput> {
        debug!("Running: {}", render_command(program, args));

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| Error::command_spawn(program, e))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            combined,
        })
    }
}

/// Run a command and turn a non-zero exit into [`Error::ToolFailed`]
pub fn run_checked(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
    cwd: Option<&Utf8Path>,
) -> Result<CommandOutput> {
    let output = runner.run(program, args, cwd)?;

    if !output.success {
        let detail = match (output.trimmed(), output.code) {
            ("", Some(code)) => format!("exit status {}", code),
            ("", None) => "terminated by signal".to_string(),
            (text, _) => text.to_string(),
        };
        return Err(Error::tool_failed(render_command(program, args), detail));
    }

    Ok(output)
}

/// Render a command line for logs and error messages
pub fn render_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
