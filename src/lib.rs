//! # dispctl
//!
//! Small display utilities for the desktop: enumerate monitors, find the one
//! under the mouse pointer, switch resolutions, flash an identification
//! number on every monitor and play a video full-screen.
//!
//! ## Features
//!
//! - Active display enumeration in platform order
//! - Pointer-to-display lookup with half-open bounds
//! - Resolution changes that are validated before they are applied
//! - Identification markers torn down together by a single timer
//! - Full-screen playback through GStreamer (`gstreamer` feature)
//!
//! Windows is the only backend. On other targets every OS call reports
//! [`Error::NotSupported`] or an empty display list.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dispctl::{ModeRequest, change_resolution, display_at_cursor, displays};
//!
//! for display in displays() {
//!     println!("{} - {}", display.device_name, display.description);
//! }
//!
//! if let Some(name) = display_at_cursor().expect("cursor lookup failed") {
//!     change_resolution(&ModeRequest::new(1280, 720).on_device(name))
//!         .expect("resolution change failed");
//! }
//! ```
//!
//! ## Architecture
//!
//! Every operation is written against the [`DisplayApi`], [`MarkerHost`] and
//! [`MediaPlayer`] traits. The `platform` module provides the native
//! implementations; tests substitute in-memory ones.

pub mod cursor;
pub mod display;
pub mod enumerate;
pub mod error;
pub mod identify;
pub mod playback;
pub mod resolution;
pub mod session;

mod platform;

#[cfg(test)]
mod testing;

// Re-exports
pub use display::{
    AdapterRecord, ChangeAction, DISP_CHANGE_SUCCESSFUL, DisplayApi, DisplayDevice, DisplayMode,
    ModeRequest, Point, Rect, change_resolution, display_at_cursor, displays,
};
pub use error::{Error, Result};
#[cfg(feature = "tokio")]
pub use identify::{identify_async, identify_async_with};
pub use identify::{
    IdentifyConfig, Marker, MarkerHost, MarkerSize, identify, identify_on, identify_with,
    layout_markers, marker_origin,
};
pub use playback::{
    DEFAULT_PLAYBACK_DEVICE, MediaPlayer, PlaybackRequest, PlaybackStatus, play_video,
};
pub use session::run_resolution_session;

// Native backends
#[cfg(feature = "gstreamer")]
pub use platform::GstPlayer;
pub use platform::{NativeDisplay, NativeMarkerHost};
