//! Resolution switching: query, validate, apply.

use crate::display::{ChangeAction, DISP_CHANGE_SUCCESSFUL, DisplayApi, ModeRequest};
use crate::error::{Error, Result};

/// Change the resolution of the requested display.
///
/// The current mode is read, only its width and height are replaced, the
/// result is validated with a test-only request and then applied. Each step
/// short-circuits the later ones on failure. Nothing is rolled back when the
/// apply step fails after a successful validation.
pub fn change_resolution<A: DisplayApi>(api: &A, request: &ModeRequest) -> Result<()> {
    let device = request.device.as_deref();
    let (width, height) = (request.width, request.height);

    let mut mode = api.current_mode(device).ok_or_else(|| {
        let err = Error::ModeQuery {
            device: request.device.clone(),
        };
        log::warn!("{err}");
        err
    })?;

    mode.width = width;
    mode.height = height;

    let code = api.change_mode(device, &mode, ChangeAction::Test);
    log::debug!("validate {width}x{height} on {device:?}: code {code}");
    if code != DISP_CHANGE_SUCCESSFUL {
        let err = Error::UnsupportedMode {
            width,
            height,
            code,
        };
        log::warn!("{err}");
        return Err(err);
    }

    let code = api.change_mode(device, &mode, ChangeAction::Apply);
    log::debug!("apply {width}x{height} on {device:?}: code {code}");
    if code != DISP_CHANGE_SUCCESSFUL {
        let err = Error::Apply { code };
        log::warn!("{err}");
        return Err(err);
    }

    log::info!("Resolution changed to {width}x{height} successfully.");
    Ok(())
}
