//! Show each display's number on that display.

use dispctl::{IdentifyConfig, displays, identify};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let displays = displays();
    if displays.is_empty() {
        println!("No active displays found.");
        return ExitCode::FAILURE;
    }

    for (i, display) in displays.iter().enumerate() {
        println!(
            "  {}. {} - {} ({}x{} at {}, {})",
            i + 1,
            display.device_name,
            display.description,
            display.bounds.width,
            display.bounds.height,
            display.bounds.x,
            display.bounds.y,
        );
    }

    match identify(&displays, &IdentifyConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
