//! Full-screen video playback through a media-player binding.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Target display used when none is given on the command line.
pub const DEFAULT_PLAYBACK_DEVICE: &str = r"\\.\DISPLAY1";

/// Terminal state of a playback session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// The media played to the end.
    Ended,
    /// The player gave up; carries the player's message.
    Errored(String),
}

/// What to play and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackRequest {
    /// Video file to open. Not checked for existence before playback.
    pub path: PathBuf,
    /// Target display.
    pub device: Option<String>,
    /// Present full-screen.
    pub fullscreen: bool,
}

impl PlaybackRequest {
    /// Full-screen playback of `path` on the default display.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            device: Some(DEFAULT_PLAYBACK_DEVICE.to_string()),
            fullscreen: true,
        }
    }

    /// Play on `device` instead of the default display.
    pub fn on_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }
}

/// A media player instance bound to one file.
pub trait MediaPlayer {
    /// Load the media at `path`.
    fn open(&mut self, path: &Path) -> Result<()>;

    /// Enable or disable full-screen presentation.
    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<()>;

    /// Display the video should be shown on. Players may treat this as a hint.
    fn set_target_display(&mut self, device: Option<&str>) -> Result<()>;

    /// Start playback.
    fn play(&mut self) -> Result<()>;

    /// Block until playback reaches a terminal state.
    fn wait_until_finished(&mut self) -> Result<PlaybackStatus>;
}

/// Play a video file and block until it ends or fails.
pub fn play_video<P: MediaPlayer>(player: &mut P, request: &PlaybackRequest) -> Result<PlaybackStatus> {
    log::info!(
        "playing {} on {}",
        request.path.display(),
        request.device.as_deref().unwrap_or("primary display")
    );

    player.open(&request.path)?;
    player.set_fullscreen(request.fullscreen)?;
    player.set_target_display(request.device.as_deref())?;
    player.play()?;

    let status = player.wait_until_finished()?;
    match &status {
        PlaybackStatus::Ended => log::info!("playback finished"),
        PlaybackStatus::Errored(message) => log::warn!("playback failed: {message}"),
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Debug, PartialEq)]
    enum Step {
        Open(PathBuf),
        Fullscreen(bool),
        Target(Option<String>),
        Play,
        Wait,
    }

    struct ScriptedPlayer {
        steps: Vec<Step>,
        outcome: PlaybackStatus,
        fail_play: bool,
    }

    impl ScriptedPlayer {
        fn ending(outcome: PlaybackStatus) -> Self {
            Self {
                steps: Vec::new(),
                outcome,
                fail_play: false,
            }
        }
    }

    impl MediaPlayer for ScriptedPlayer {
        fn open(&mut self, path: &Path) -> Result<()> {
            self.steps.push(Step::Open(path.to_path_buf()));
            Ok(())
        }

        fn set_fullscreen(&mut self, fullscreen: bool) -> Result<()> {
            self.steps.push(Step::Fullscreen(fullscreen));
            Ok(())
        }

        fn set_target_display(&mut self, device: Option<&str>) -> Result<()> {
            self.steps.push(Step::Target(device.map(str::to_string)));
            Ok(())
        }

        fn play(&mut self) -> Result<()> {
            self.steps.push(Step::Play);
            if self.fail_play {
                return Err(Error::Playback("state change failed".into()));
            }
            Ok(())
        }

        fn wait_until_finished(&mut self) -> Result<PlaybackStatus> {
            self.steps.push(Step::Wait);
            Ok(self.outcome.clone())
        }
    }

    #[test]
    fn test_play_video_call_order() {
        let mut player = ScriptedPlayer::ending(PlaybackStatus::Ended);
        let request = PlaybackRequest::new("movie.mp4").on_device(r"\\.\DISPLAY2");

        let status = play_video(&mut player, &request).unwrap();

        assert_eq!(status, PlaybackStatus::Ended);
        assert_eq!(
            player.steps,
            vec![
                Step::Open(PathBuf::from("movie.mp4")),
                Step::Fullscreen(true),
                Step::Target(Some(r"\\.\DISPLAY2".into())),
                Step::Play,
                Step::Wait,
            ]
        );
    }

    #[test]
    fn test_default_device() {
        let request = PlaybackRequest::new("clip.mkv");
        assert_eq!(request.device.as_deref(), Some(DEFAULT_PLAYBACK_DEVICE));
        assert!(request.fullscreen);
    }

    #[test]
    fn test_player_error_status_is_returned() {
        let mut player =
            ScriptedPlayer::ending(PlaybackStatus::Errored("file not found".into()));
        let status = play_video(&mut player, &PlaybackRequest::new("missing.mp4")).unwrap();
        assert_eq!(status, PlaybackStatus::Errored("file not found".into()));
    }

    #[test]
    fn test_play_failure_skips_wait() {
        let mut player = ScriptedPlayer::ending(PlaybackStatus::Ended);
        player.fail_play = true;
        assert!(play_video(&mut player, &PlaybackRequest::new("a.mp4")).is_err());
        assert_eq!(player.steps.last(), Some(&Step::Play));
    }
}
