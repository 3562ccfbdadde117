use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, bail};

/// Interpreter commands probed in priority order.
const CANDIDATES: [&str; 2] = ["python3", "python"];

/// Locates a Python interpreter on the executable search path.
pub fn find_interpreter() -> Result<PathBuf> {
    find_interpreter_in(env::var_os("PATH"))
}

fn find_interpreter_in(search_path: Option<OsString>) -> Result<PathBuf> {
    let cwd = env::current_dir()?;

    for candidate in CANDIDATES {
        if let Ok(path) = which::which_in(candidate, search_path.as_ref(), &cwd) {
            log::debug!("selected interpreter: {}", path.display());
            return Ok(path);
        }
    }

    bail!("no python interpreter found (tried python3, python)")
}
