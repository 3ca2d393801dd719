//! Locate the display under the mouse pointer.

use crate::display::{DisplayApi, Point};
use crate::error::Result;

/// Find the display that currently contains the mouse pointer.
///
/// DPI awareness is enabled first so the pointer and the mode rectangles are
/// both in physical pixels. Returns the first device whose current mode
/// rectangle contains the pointer, or `None` (e.g. a stale query).
pub fn display_at_cursor<A, S>(api: &A, device_names: &[S]) -> Result<Option<String>>
where
    A: DisplayApi,
    S: AsRef<str>,
{
    ensure_dpi_awareness(api);

    let cursor = api.cursor_position()?;
    log::debug!("cursor at ({}, {})", cursor.x, cursor.y);
    Ok(display_at_point(api, device_names, cursor))
}

/// Make the process per-monitor DPI aware so window and pointer coordinates
/// are physical pixels, like the mode rectangles.
pub(crate) fn ensure_dpi_awareness<A: DisplayApi>(api: &A) {
    if let Err(e) = api.enable_dpi_awareness() {
        // Fails when the process awareness was already set; coordinates are
        // physical either way once it has been set once.
        log::debug!("DPI awareness not changed: {e}");
    }
}

/// Find the first device whose current mode rectangle contains `point`.
///
/// Devices whose mode cannot be read are skipped.
pub fn display_at_point<A, S>(api: &A, device_names: &[S], point: Point) -> Option<String>
where
    A: DisplayApi,
    S: AsRef<str>,
{
    device_names
        .iter()
        .map(AsRef::as_ref)
        .find(|name| {
            api.current_mode(Some(*name))
                .is_some_and(|mode| mode.rect().contains(point))
        })
        .map(str::to_string)
}
