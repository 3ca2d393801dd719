//! Stubs for targets without a display-settings backend.

use crate::display::{AdapterRecord, ChangeAction, DisplayApi, DisplayMode, Point};
use crate::error::{Error, Result};
use crate::identify::{Marker, MarkerHost};
use std::time::Duration;

// DISP_CHANGE_FAILED
const CHANGE_FAILED: i32 = -1;

/// Display API of the running system. Reports no displays on this target.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDisplay;

impl DisplayApi for NativeDisplay {
    fn enum_device(&self, _index: u32) -> Option<AdapterRecord> {
        None
    }

    fn current_mode(&self, _device: Option<&str>) -> Option<DisplayMode> {
        None
    }

    fn change_mode(&self, _device: Option<&str>, _mode: &DisplayMode, _action: ChangeAction) -> i32 {
        CHANGE_FAILED
    }

    fn enable_dpi_awareness(&self) -> Result<()> {
        Err(Error::NotSupported(
            "DPI awareness is only available on Windows".into(),
        ))
    }

    fn cursor_position(&self) -> Result<Point> {
        Err(Error::NotSupported(
            "cursor position is only available on Windows".into(),
        ))
    }
}

/// Marker windows of the running system. Not available on this target.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeMarkerHost;

impl MarkerHost for NativeMarkerHost {
    fn run(self, _markers: Vec<Marker>, _lifetime: Duration) -> Result<()> {
        Err(Error::NotSupported(
            "identification markers are only available on Windows".into(),
        ))
    }
}
