//! Win32 marker windows for display identification.

use crate::error::{Error, Result};
use crate::identify::{Marker, MarkerHost};
use std::sync::OnceLock;
use std::time::Duration;
use windows::Win32::Foundation::{COLORREF, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, CLEARTYPE_QUALITY, CLIP_DEFAULT_PRECIS, CreateFontW, CreateSolidBrush,
    DEFAULT_CHARSET, DT_CENTER, DT_SINGLELINE, DT_VCENTER, DeleteObject, DrawTextW, EndPaint,
    FW_BOLD, FillRect, OUT_DEFAULT_PRECIS, PAINTSTRUCT, SelectObject, SetBkMode, SetTextColor,
    TRANSPARENT, UpdateWindow,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CS_HREDRAW, CS_VREDRAW, CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW,
    GetClientRect, GetMessageW, GetWindowTextW, KillTimer, MSG, PostQuitMessage, RegisterClassW,
    SW_SHOWNOACTIVATE, SetTimer, ShowWindow, TranslateMessage, WM_PAINT, WM_TIMER, WNDCLASSW,
    WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
};
use windows::core::PCWSTR;

use super::to_wide;

const CLASS_NAME: &str = "DispctlMarkerClass";

/// Class registration result, shared by every identification session.
static WINDOW_CLASS: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Marker windows of the running system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeMarkerHost;

impl MarkerHost for NativeMarkerHost {
    fn run(self, markers: Vec<Marker>, lifetime: Duration) -> Result<()> {
        let instance = module_instance()?;
        register_marker_class(instance)?;

        let mut hwnds = Vec::with_capacity(markers.len());
        for marker in &markers {
            match create_marker(instance, marker) {
                Ok(hwnd) => hwnds.push(hwnd),
                Err(e) => {
                    destroy_all(&hwnds);
                    return Err(e);
                }
            }
        }

        let elapse = lifetime.as_millis().clamp(1, u32::MAX as u128) as u32;
        let timer = unsafe { SetTimer(None, 0, elapse, None) };
        if timer == 0 {
            destroy_all(&hwnds);
            return Err(Error::Platform("SetTimer failed".into()));
        }
        log::debug!("{} marker(s) shown, closing in {elapse} ms", hwnds.len());

        unsafe {
            let mut msg = MSG::default();
            while GetMessageW(&mut msg, None, 0, 0).as_bool() {
                // Thread timer: no window, no timer procedure.
                if msg.message == WM_TIMER && msg.hwnd.0.is_null() && msg.wParam.0 == timer {
                    let _ = KillTimer(None, timer);
                    destroy_all(&hwnds);
                    PostQuitMessage(0);
                    continue;
                }
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }

        Ok(())
    }
}

/// Window procedure for marker windows: draws the ordinal, white on black.
unsafe extern "system" fn wnd_proc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_PAINT => {
                paint_marker(hwnd);
                LRESULT(0)
            }
            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}

unsafe fn paint_marker(hwnd: HWND) {
    unsafe {
        let mut ps = PAINTSTRUCT::default();
        let hdc = BeginPaint(hwnd, &mut ps);
        if hdc.is_invalid() {
            return;
        }

        let mut client = RECT::default();
        let _ = GetClientRect(hwnd, &mut client);

        let brush = CreateSolidBrush(COLORREF(0x00000000));
        if !brush.is_invalid() {
            FillRect(hdc, &client, brush);
            let _ = DeleteObject(brush.into());
        }

        let face = to_wide("Segoe UI");
        let font = CreateFontW(
            (client.bottom - client.top) * 2 / 3,
            0,
            0,
            0,
            FW_BOLD.0 as i32,
            0,
            0,
            0,
            DEFAULT_CHARSET,
            OUT_DEFAULT_PRECIS,
            CLIP_DEFAULT_PRECIS,
            CLEARTYPE_QUALITY,
            0,
            PCWSTR(face.as_ptr()),
        );
        let previous = SelectObject(hdc, font.into());

        SetBkMode(hdc, TRANSPARENT);
        SetTextColor(hdc, COLORREF(0x00FFFFFF));

        let mut text = [0u16; 16];
        let len = GetWindowTextW(hwnd, &mut text).max(0) as usize;
        DrawTextW(
            hdc,
            &mut text[..len],
            &mut client,
            DT_CENTER | DT_VCENTER | DT_SINGLELINE,
        );

        SelectObject(hdc, previous);
        let _ = DeleteObject(font.into());
        let _ = EndPaint(hwnd, &ps);
    }
}

fn module_instance() -> Result<HINSTANCE> {
    let module = unsafe { GetModuleHandleW(None) }
        .map_err(|e| Error::Platform(format!("GetModuleHandleW failed: {e}")))?;
    Ok(module.into())
}

fn register_marker_class(instance: HINSTANCE) -> Result<()> {
    WINDOW_CLASS
        .get_or_init(|| {
            let class_name = to_wide(CLASS_NAME);
            let wc = WNDCLASSW {
                lpfnWndProc: Some(wnd_proc),
                hInstance: instance,
                lpszClassName: PCWSTR(class_name.as_ptr()),
                style: CS_HREDRAW | CS_VREDRAW,
                ..Default::default()
            };

            if unsafe { RegisterClassW(&wc) } == 0 {
                Err("RegisterClassW failed".to_string())
            } else {
                Ok(())
            }
        })
        .clone()
        .map_err(Error::Platform)
}

fn create_marker(instance: HINSTANCE, marker: &Marker) -> Result<HWND> {
    let class_name = to_wide(CLASS_NAME);
    let title = to_wide(&marker.ordinal.to_string());
    let rect = marker.rect;

    unsafe {
        let hwnd = CreateWindowExW(
            WS_EX_TOPMOST | WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE,
            PCWSTR(class_name.as_ptr()),
            PCWSTR(title.as_ptr()),
            WS_POPUP,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            None,
            None,
            Some(instance),
            None,
        )
        .map_err(|e| Error::Platform(format!("CreateWindowExW failed: {e}")))?;

        let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
        let _ = UpdateWindow(hwnd);
        Ok(hwnd)
    }
}

fn destroy_all(hwnds: &[HWND]) {
    for &hwnd in hwnds {
        unsafe {
            let _ = DestroyWindow(hwnd);
        }
    }
}
