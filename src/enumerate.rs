//! Active display enumeration.

use crate::display::{DisplayApi, DisplayDevice, Rect};

/// List active displays in enumeration order.
///
/// Indices are queried from zero until the platform reports no device.
/// Inactive adapters are skipped. An empty vector is a valid (empty)
/// configuration, not an error.
pub fn list_displays<A: DisplayApi>(api: &A) -> Vec<DisplayDevice> {
    let mut displays = Vec::new();
    let mut index = 0;

    while let Some(adapter) = api.enum_device(index) {
        index += 1;
        if !adapter.is_active {
            log::debug!("skipping inactive adapter {}", adapter.device_name);
            continue;
        }

        log::debug!("{} - {}", adapter.device_name, adapter.description);

        let bounds = match api.current_mode(Some(&adapter.device_name)) {
            Some(mode) => mode.rect(),
            None => {
                log::warn!(
                    "could not read current mode of {}, bounds unknown",
                    adapter.device_name
                );
                Rect::default()
            }
        };

        displays.push(DisplayDevice {
            device_name: adapter.device_name,
            description: adapter.description,
            is_active: true,
            bounds,
        });
    }

    displays
}
