//! Win32 display enumeration, mode queries and mode changes.

use crate::display::{AdapterRecord, ChangeAction, DisplayApi, DisplayMode, Point};
use crate::error::{Error, Result};
use std::mem::size_of;
use windows::Win32::Foundation::{POINT, POINTL};
use windows::Win32::Graphics::Gdi::{
    CDS_TEST, CDS_TYPE, ChangeDisplaySettingsExW, DEVMODE_DISPLAY_FIXED_OUTPUT,
    DEVMODE_DISPLAY_ORIENTATION, DEVMODEW, DEVMODEW_0, DEVMODEW_0_1, DEVMODEW_1,
    DISPLAY_DEVICE_ACTIVE, DISPLAY_DEVICEW, DM_PELSHEIGHT, DM_PELSWIDTH, ENUM_CURRENT_SETTINGS,
    EnumDisplayDevicesW, EnumDisplaySettingsW,
};
use windows::Win32::UI::HiDpi::{PROCESS_PER_MONITOR_DPI_AWARE, SetProcessDpiAwareness};
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;
use windows::core::PCWSTR;

use super::to_wide;

/// Display API of the running system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDisplay;

impl DisplayApi for NativeDisplay {
    fn enum_device(&self, index: u32) -> Option<AdapterRecord> {
        let mut device = DISPLAY_DEVICEW {
            cb: size_of::<DISPLAY_DEVICEW>() as u32,
            ..Default::default()
        };

        let ok = unsafe { EnumDisplayDevicesW(PCWSTR::null(), index, &mut device, 0) };
        if !ok.as_bool() {
            return None;
        }

        Some(AdapterRecord {
            device_name: from_wide(&device.DeviceName),
            description: from_wide(&device.DeviceString),
            is_active: (device.StateFlags.0 & DISPLAY_DEVICE_ACTIVE.0) != 0,
        })
    }

    fn current_mode(&self, device: Option<&str>) -> Option<DisplayMode> {
        let name = device.map(to_wide);
        query_devmode(&name).map(|devmode| mode_from_devmode(&devmode))
    }

    fn change_mode(&self, device: Option<&str>, mode: &DisplayMode, action: ChangeAction) -> i32 {
        let name = device.map(to_wide);
        // Echo the driver's own structure back; only the mode fields change.
        let base = query_devmode(&name).unwrap_or_else(|| DEVMODEW {
            dmSize: size_of::<DEVMODEW>() as u16,
            ..Default::default()
        });
        let devmode = devmode_from_mode(base, mode);
        let flags = match action {
            ChangeAction::Test => CDS_TEST,
            ChangeAction::Apply => CDS_TYPE(0),
        };

        let result = unsafe {
            ChangeDisplaySettingsExW(
                pcwstr(&name),
                Some(&devmode as *const DEVMODEW),
                None,
                flags,
                None,
            )
        };
        result.0
    }

    fn enable_dpi_awareness(&self) -> Result<()> {
        unsafe { SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE) }
            .map_err(|e| Error::Platform(format!("SetProcessDpiAwareness failed: {e}")))
    }

    fn cursor_position(&self) -> Result<Point> {
        let mut point = POINT::default();
        unsafe { GetCursorPos(&mut point) }
            .map_err(|e| Error::Platform(format!("GetCursorPos failed: {e}")))?;
        Ok(Point::new(point.x, point.y))
    }
}

fn mode_from_devmode(devmode: &DEVMODEW) -> DisplayMode {
    // The display variant of the unions is the only one EnumDisplaySettingsW fills.
    let display = unsafe { devmode.Anonymous1.Anonymous2 };
    let display_flags = unsafe { devmode.Anonymous2.dmDisplayFlags };

    DisplayMode {
        position: Point::new(display.dmPosition.x, display.dmPosition.y),
        width: devmode.dmPelsWidth,
        height: devmode.dmPelsHeight,
        bits_per_pixel: devmode.dmBitsPerPel,
        frequency: devmode.dmDisplayFrequency,
        orientation: display.dmDisplayOrientation.0,
        fixed_output: display.dmDisplayFixedOutput.0,
        display_flags,
    }
}

fn query_devmode(name: &Option<Vec<u16>>) -> Option<DEVMODEW> {
    let mut devmode = DEVMODEW {
        dmSize: size_of::<DEVMODEW>() as u16,
        ..Default::default()
    };

    let ok = unsafe { EnumDisplaySettingsW(pcwstr(name), ENUM_CURRENT_SETTINGS, &mut devmode) };
    ok.as_bool().then_some(devmode)
}

fn devmode_from_mode(base: DEVMODEW, mode: &DisplayMode) -> DEVMODEW {
    DEVMODEW {
        // Only the resolution is requested; the rest is echoed unchanged.
        dmFields: DM_PELSWIDTH | DM_PELSHEIGHT,
        Anonymous1: DEVMODEW_0 {
            Anonymous2: DEVMODEW_0_1 {
                dmPosition: POINTL {
                    x: mode.position.x,
                    y: mode.position.y,
                },
                dmDisplayOrientation: DEVMODE_DISPLAY_ORIENTATION(mode.orientation),
                dmDisplayFixedOutput: DEVMODE_DISPLAY_FIXED_OUTPUT(mode.fixed_output),
            },
        },
        dmBitsPerPel: mode.bits_per_pixel,
        dmPelsWidth: mode.width,
        dmPelsHeight: mode.height,
        Anonymous2: DEVMODEW_1 {
            dmDisplayFlags: mode.display_flags,
        },
        dmDisplayFrequency: mode.frequency,
        ..base
    }
}

fn from_wide(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

fn pcwstr(name: &Option<Vec<u16>>) -> PCWSTR {
    match name {
        Some(wide) => PCWSTR(wide.as_ptr()),
        None => PCWSTR::null(),
    }
}
