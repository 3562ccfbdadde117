use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};

use crate::interpreter;

/// The application entry point executed inside the isolated environment.
const TARGET_PROGRAM: &str = "main.py";

/// Module used to run the target with its own dependency set.
const RUNNER_MODULE: &str = "pipenv";

/// Runs `main.py` through the dependency runner, forwarding `args` unchanged.
/// Blocks until the child exits and returns its exit code.
pub fn launch(args: Vec<OsString>) -> Result<i32> {
    let dir = launcher_dir()?;
    env::set_current_dir(&dir)
        .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    log::debug!("working directory: {}", dir.display());

    let interpreter = interpreter::find_interpreter()?;

    let mut command = delegate_command(&interpreter, args);
    log::debug!("delegating: {:?}", command);

    let status = command
        .status()
        .with_context(|| format!("failed to execute {}", interpreter.display()))?;

    Ok(exit_code(status))
}

// Directory containing the launcher executable itself.
fn launcher_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("failed to obtain current exe path")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("failed to canonicalize {}", exe.display()))?;
    dir_of(&exe)
}

fn dir_of(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("{} has no containing directory", exe.display()))
}

// Builds `<interpreter> -m pipenv run python main.py <args...>`.
fn delegate_command(interpreter: &Path, args: Vec<OsString>) -> Command {
    let mut command = Command::new(interpreter);
    command
        .arg("-m")
        .arg(RUNNER_MODULE)
        .arg("run")
        .arg("python")
        .arg(TARGET_PROGRAM)
        .args(args);
    command
}

fn exit_code(status: ExitStatus) -> i32 {
    // A signal-terminated child carries no exit code.
    status.code().unwrap_or(1)
}
