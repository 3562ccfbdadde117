mod delegate;
mod interpreter;

use std::env;
use std::ffi::OsString;
use std::process::exit;

fn main() {
    env_logger::init();

    // Everything after argv[0] belongs to main.py.
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    match delegate::launch(args) {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("i3-quickterm: {:#}", e);
            exit(1);
        }
    }
}
