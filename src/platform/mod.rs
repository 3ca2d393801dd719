//! Platform-specific implementations.

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use windows::*;

#[cfg(not(target_os = "windows"))]
mod unsupported;
#[cfg(not(target_os = "windows"))]
pub use unsupported::*;

#[cfg(feature = "gstreamer")]
mod gst;
#[cfg(feature = "gstreamer")]
pub use gst::GstPlayer;
