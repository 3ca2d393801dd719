//! Error types for display and playback operations.

use thiserror::Error;

/// Result type alias for dispctl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying or changing displays.
#[derive(Debug, Error)]
pub enum Error {
    /// The current display mode could not be read.
    #[error("Could not retrieve current display settings.")]
    ModeQuery {
        /// Device that was queried (`None` for the primary display).
        device: Option<String>,
    },

    /// The validate-only mode change was rejected.
    #[error("Resolution {width}x{height} is not supported.")]
    UnsupportedMode {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Code returned by the platform.
        code: i32,
    },

    /// The real mode change was rejected.
    #[error("Failed to change resolution. Error code: {code}")]
    Apply {
        /// Code returned by the platform, unchanged.
        code: i32,
    },

    /// Enumeration returned no active display.
    #[error("No active displays found.")]
    EmptyDisplayList,

    /// A display selection was outside `1..=count`.
    #[error("Invalid selection.")]
    InvalidSelection {
        /// The number the user entered.
        choice: i64,
        /// Number of displays offered.
        count: usize,
    },

    /// A prompt answer was not an integer.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A required command-line argument was not supplied.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// The media library failed outside of playback itself.
    #[error("playback error: {0}")]
    Playback(String),

    /// Platform-specific error.
    #[error("platform error: {0}")]
    Platform(String),

    /// The requested feature is not supported on this platform.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// Thread-related error.
    #[error("thread error: {0}")]
    Thread(String),

    /// Prompt input/output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_tool_output() {
        assert_eq!(
            Error::ModeQuery { device: None }.to_string(),
            "Could not retrieve current display settings."
        );
        assert_eq!(
            Error::UnsupportedMode {
                width: 1280,
                height: 720,
                code: -2
            }
            .to_string(),
            "Resolution 1280x720 is not supported."
        );
        assert_eq!(
            Error::Apply { code: -1 }.to_string(),
            "Failed to change resolution. Error code: -1"
        );
        assert_eq!(
            Error::EmptyDisplayList.to_string(),
            "No active displays found."
        );
    }
}
