use std::{env, ffi::OsString, process::ExitCode};

use fann_random::cli::{self, Outcome};
use log::debug;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<OsString> = env::args_os().collect();
    let (policy, result) = cli::run(&args);

    match &result {
        Ok(Outcome::Help) => print!("{}", cli::usage()),
        Ok(Outcome::Written(path)) => debug!("done writing {}", path.display()),
        Err(e) => {
            eprintln!("[ERROR] {e}");

            if e.is_usage() {
                print!("{}", cli::usage());
            }
        }
    }

    ExitCode::from(policy.status(result.as_ref().err()))
}
