//! In-memory display API used by the unit tests.

use crate::display::{AdapterRecord, ChangeAction, DisplayApi, DisplayMode, Point, Rect};
use crate::display::DISP_CHANGE_SUCCESSFUL;
use crate::error::{Error, Result};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    EnumDevice(u32),
    CurrentMode(Option<String>),
    ChangeMode(Option<String>, DisplayMode, ChangeAction),
    EnableDpiAwareness,
    CursorPosition,
}

struct FakeAdapter {
    record: AdapterRecord,
    mode: Option<DisplayMode>,
}

pub struct FakeDisplay {
    adapters: Vec<FakeAdapter>,
    primary: Option<DisplayMode>,
    cursor: Option<Point>,
    test_code: i32,
    apply_code: i32,
    dpi_enabled: Cell<bool>,
    calls: RefCell<Vec<Call>>,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
            primary: None,
            cursor: None,
            test_code: DISP_CHANGE_SUCCESSFUL,
            apply_code: DISP_CHANGE_SUCCESSFUL,
            dpi_enabled: Cell::new(false),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_display(mut self, name: &str, rect: Rect) -> Self {
        let mode = mode_for(rect);
        if self.primary.is_none() {
            self.primary = Some(mode);
        }
        self.adapters.push(FakeAdapter {
            record: adapter_record(name, true),
            mode: Some(mode),
        });
        self
    }

    pub fn with_inactive(mut self, name: &str) -> Self {
        self.adapters.push(FakeAdapter {
            record: adapter_record(name, false),
            mode: None,
        });
        self
    }

    pub fn with_unreadable(mut self, name: &str) -> Self {
        self.adapters.push(FakeAdapter {
            record: adapter_record(name, true),
            mode: None,
        });
        self
    }

    pub fn with_cursor(mut self, x: i32, y: i32) -> Self {
        self.cursor = Some(Point::new(x, y));
        self
    }

    pub fn with_codes(mut self, test_code: i32, apply_code: i32) -> Self {
        self.test_code = test_code;
        self.apply_code = apply_code;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn change_calls(&self) -> Vec<(Option<String>, DisplayMode, ChangeAction)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::ChangeMode(device, mode, action) => Some((device, mode, action)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl DisplayApi for FakeDisplay {
    fn enum_device(&self, index: u32) -> Option<AdapterRecord> {
        self.record(Call::EnumDevice(index));
        self.adapters
            .get(index as usize)
            .map(|adapter| adapter.record.clone())
    }

    fn current_mode(&self, device: Option<&str>) -> Option<DisplayMode> {
        self.record(Call::CurrentMode(device.map(str::to_string)));
        match device {
            None => self.primary,
            Some(name) => self
                .adapters
                .iter()
                .find(|adapter| adapter.record.device_name == name)
                .and_then(|adapter| adapter.mode),
        }
    }

    fn change_mode(&self, device: Option<&str>, mode: &DisplayMode, action: ChangeAction) -> i32 {
        self.record(Call::ChangeMode(device.map(str::to_string), *mode, action));
        match action {
            ChangeAction::Test => self.test_code,
            ChangeAction::Apply => self.apply_code,
        }
    }

    fn enable_dpi_awareness(&self) -> Result<()> {
        self.record(Call::EnableDpiAwareness);
        if self.dpi_enabled.replace(true) {
            return Err(Error::Platform("DPI awareness already set".into()));
        }
        Ok(())
    }

    fn cursor_position(&self) -> Result<Point> {
        self.record(Call::CursorPosition);
        self.cursor
            .ok_or_else(|| Error::Platform("GetCursorPos failed".into()))
    }
}

fn adapter_record(name: &str, is_active: bool) -> AdapterRecord {
    AdapterRecord {
        device_name: name.to_string(),
        description: format!("Fake adapter {name}"),
        is_active,
    }
}

fn mode_for(rect: Rect) -> DisplayMode {
    DisplayMode {
        position: Point::new(rect.x, rect.y),
        width: rect.width as u32,
        height: rect.height as u32,
        bits_per_pixel: 32,
        frequency: 60,
        orientation: 0,
        fixed_output: 0,
        display_flags: 0,
    }
}
