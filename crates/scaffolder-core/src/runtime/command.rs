//! External command execution
//!
//! Probes whether a program answers `--version` and runs programs to
//! completion while streaming their output to the console.

use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::path::Path;
use std::process::{Command, Stdio};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// Exit status of a finished subprocess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl CommandOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Build a command for `program`
///
/// Windows package managers ship as `.cmd` shims that `CreateProcess` will not
/// resolve on its own, so they go through `cmd /C` there.
fn program_command(program: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(program);
        cmd
    } else {
        Command::new(program)
    }
}

/// Check that `program --version` runs and exits successfully
pub fn probe_available(program: &str) -> bool {
    program_command(program)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Get the version `program --version` reports (if it exits successfully)
///
/// Output that is not valid UTF-8 is decoded lossily.
pub fn probe_version(program: &str) -> Option<String> {
    program_command(program)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Spawn `program` in `cwd` and wait for it, streaming its output
///
/// There is no timeout: a process that never exits blocks here.
pub async fn spawn_and_wait(program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutcome> {
    let spawn_failed = |source| ScaffoldError::CommandFailed {
        program: program.to_string(),
        code: None,
        source: Some(source),
    };

    let mut cmd = program_command(program);
    cmd.args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = TokioCommand::from(cmd).spawn().map_err(spawn_failed)?;

    let mut stdout_lines = child.stdout.take().map(|s| BufReader::new(s).lines());
    let mut stderr_lines = child.stderr.take().map(|s| BufReader::new(s).lines());

    while stdout_lines.is_some() || stderr_lines.is_some() {
        tokio::select! {
            line = next_line(&mut stdout_lines), if stdout_lines.is_some() => match line {
                Some(line) => println!("  {}", line.dimmed()),
                None => stdout_lines = None,
            },
            line = next_line(&mut stderr_lines), if stderr_lines.is_some() => match line {
                Some(line) => eprintln!("  {}", line.yellow()),
                None => stderr_lines = None,
            },
        }
    }

    let status = child.wait().await.map_err(spawn_failed)?;
    Ok(CommandOutcome {
        exit_code: status.code(),
    })
}

type Lines<R> = tokio::io::Lines<BufReader<R>>;

/// Next line from an open stream; read errors end the stream
async fn next_line<R>(lines: &mut Option<Lines<R>>) -> Option<String>
where
    R: tokio::io::AsyncRead + Unpin,
{
    match lines {
        Some(lines) => lines.next_line().await.ok().flatten(),
        None => None,
    }
}

/// Run `program` to completion, failing unless it exits with code 0
pub async fn run_command(program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutcome> {
    let outcome = spawn_and_wait(program, args, cwd).await?;
    if outcome.succeeded() {
        Ok(outcome)
    } else {
        Err(ScaffoldError::CommandFailed {
            program: program.to_string(),
            code: outcome.exit_code,
            source: None,
        })
    }
}
