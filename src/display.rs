//! Display records and the platform display-settings seam.

use crate::error::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Return code of a mode change request that succeeded.
pub const DISP_CHANGE_SUCCESSFUL: i32 = 0;

/// A point in virtual-desktop coordinates (physical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in virtual-desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left coordinate.
    pub x: i32,
    /// Top coordinate.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Check whether a point is inside this rectangle.
    ///
    /// Bounds are half-open: the left and top edges belong to the rectangle,
    /// the right and bottom edges belong to its neighbours.
    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (point.x as i64, point.y as i64);
        x >= self.x as i64 && y >= self.y as i64 && x < self.right() && y < self.bottom()
    }
}

/// What the platform reports for one enumeration index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterRecord {
    /// Device identifier (e.g. `\\.\DISPLAY1`).
    pub device_name: String,
    /// Human-readable adapter description.
    pub description: String,
    /// Whether the device is part of the desktop.
    pub is_active: bool,
}

/// An active display output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayDevice {
    /// Device identifier (e.g. `\\.\DISPLAY1`).
    pub device_name: String,
    /// Human-readable adapter description.
    pub description: String,
    /// Whether the device is part of the desktop.
    pub is_active: bool,
    /// Position and resolution in virtual-desktop coordinates.
    pub bounds: Rect,
}

/// A display mode as reported by the platform.
///
/// Fields other than `width` and `height` are echoed back to the platform
/// untouched when a mode change is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayMode {
    /// Position of the display in the virtual desktop.
    pub position: Point,
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// Color depth.
    pub bits_per_pixel: u32,
    /// Refresh rate in Hz.
    pub frequency: u32,
    /// Platform orientation value.
    pub orientation: u32,
    /// Platform fixed-output (scaling) value.
    pub fixed_output: u32,
    /// Platform display flags.
    pub display_flags: u32,
}

impl DisplayMode {
    /// Rectangle covered by a display in this mode.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.width as i32,
            self.height as i32,
        )
    }
}

/// A resolution change for one display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeRequest {
    /// Desired width in pixels.
    pub width: u32,
    /// Desired height in pixels.
    pub height: u32,
    /// Target device; `None` targets the primary display.
    pub device: Option<String>,
}

impl ModeRequest {
    /// Request a resolution on the primary display.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            device: None,
        }
    }

    /// Target a specific device.
    pub fn on_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }
}

/// How a mode change request is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    /// Only check whether the mode is feasible.
    Test,
    /// Commit the mode.
    Apply,
}

/// Platform display-settings API.
///
/// Implemented by the OS adapter in `platform` and by fakes in tests.
pub trait DisplayApi {
    /// Query the adapter at `index`. `None` means there is no such index.
    fn enum_device(&self, index: u32) -> Option<AdapterRecord>;

    /// Read the current mode of `device` (`None` for the primary display).
    fn current_mode(&self, device: Option<&str>) -> Option<DisplayMode>;

    /// Submit a mode change and return the platform's code.
    fn change_mode(&self, device: Option<&str>, mode: &DisplayMode, action: ChangeAction) -> i32;

    /// Make the process report coordinates in physical pixels.
    fn enable_dpi_awareness(&self) -> Result<()>;

    /// Current pointer position.
    fn cursor_position(&self) -> Result<Point>;
}

impl<T: DisplayApi + ?Sized> DisplayApi for &T {
    fn enum_device(&self, index: u32) -> Option<AdapterRecord> {
        (**self).enum_device(index)
    }

    fn current_mode(&self, device: Option<&str>) -> Option<DisplayMode> {
        (**self).current_mode(device)
    }

    fn change_mode(&self, device: Option<&str>, mode: &DisplayMode, action: ChangeAction) -> i32 {
        (**self).change_mode(device, mode, action)
    }

    fn enable_dpi_awareness(&self) -> Result<()> {
        (**self).enable_dpi_awareness()
    }

    fn cursor_position(&self) -> Result<Point> {
        (**self).cursor_position()
    }
}

/// List all active displays.
pub fn displays() -> Vec<DisplayDevice> {
    crate::enumerate::list_displays(&crate::platform::NativeDisplay)
}

/// Find the active display under the mouse pointer.
pub fn display_at_cursor() -> Result<Option<String>> {
    let native = crate::platform::NativeDisplay;
    let names: Vec<String> = crate::enumerate::list_displays(&native)
        .into_iter()
        .map(|display| display.device_name)
        .collect();
    crate::cursor::display_at_cursor(&native, &names)
}

/// Change the resolution of a display.
pub fn change_resolution(request: &ModeRequest) -> Result<()> {
    crate::resolution::change_resolution(&crate::platform::NativeDisplay, request)
}
