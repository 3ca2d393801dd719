//! Interactive resolution switcher.

use dispctl::{NativeDisplay, run_resolution_session};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "error"),
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match run_resolution_session(&NativeDisplay, &mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("session ended: {e:?}");
            ExitCode::FAILURE
        }
    }
}
