use crate::error::{Result, ScaffoldError};
use async_trait::async_trait;
use std::fmt;
use std::path::Path;
use std::process::Stdio;

pub mod git;
pub mod npm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn failed(&self, status: Option<i32>, stderr: impl Into<String>) -> ScaffoldError {
        ScaffoldError::CommandFailed {
            command: self.to_string(),
            status,
            stderr: stderr.into(),
        }
    }
}

fn needs_quotes(arg: &str) -> bool {
    arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'')
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if needs_quotes(arg) {
                let escaped = arg.replace('\\', "\\\\").replace('"', "\\\"");
                write!(f, " \"{escaped}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Runs external commands rooted at a directory. Implementations must not
/// touch the process working directory.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<()> {
        tracing::debug!(command = %command, cwd = %cwd.display(), "Running command");

        let output = tokio::process::Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| command.failed(None, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(
                command = %command,
                status = ?output.status.code(),
                "Command exited unsuccessfully"
            );
            return Err(command.failed(output.status.code(), stderr));
        }

        Ok(())
    }
}

pub async fn run_steps(
    runner: &dyn CommandRunner,
    cwd: &Path,
    steps: &[CommandSpec],
) -> Result<()> {
    for (index, step) in steps.iter().enumerate() {
        tracing::debug!(step = index + 1, total = steps.len(), command = %step, "Step");
        runner.run(step, cwd).await?;
    }
    Ok(())
}
