//! Play a video full-screen on a display.

use clap::Parser;
use dispctl::{
    DEFAULT_PLAYBACK_DEVICE, Error, GstPlayer, PlaybackRequest, PlaybackStatus, play_video,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(about = "Play a video full-screen on the given display")]
struct Args {
    /// Path to the video file.
    video_path: Option<PathBuf>,

    /// Display device name, e.g. \\.\DISPLAY1 (default) or \\.\DISPLAY2.
    device_name: Option<String>,
}

fn usage() {
    println!(r"Usage: play-video <video_path> [device_name]");
    println!(r"  device_name: e.g. \\.\DISPLAY1 (default), \\.\DISPLAY2");
}

fn main() -> ExitCode {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let args = Args::parse();
    let Some(video_path) = args.video_path else {
        eprintln!("Error: {}", Error::MissingArgument("video_path"));
        usage();
        return ExitCode::FAILURE;
    };

    let device = args
        .device_name
        .unwrap_or_else(|| DEFAULT_PLAYBACK_DEVICE.to_string());
    let request = PlaybackRequest::new(video_path).on_device(device);

    let mut player = match GstPlayer::new() {
        Ok(player) => player,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match play_video(&mut player, &request) {
        Ok(PlaybackStatus::Ended) => ExitCode::SUCCESS,
        Ok(PlaybackStatus::Errored(message)) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
