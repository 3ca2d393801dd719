//! Windows implementation using the Win32 display-settings and windowing APIs.

mod display;
mod overlay;

pub use display::NativeDisplay;
pub use overlay::NativeMarkerHost;

/// Null-terminated UTF-16 copy of `s`.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
