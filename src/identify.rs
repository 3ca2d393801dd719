//! Monitor identification overlay.
//!
//! Shows the 1-based ordinal of every display in a small borderless,
//! always-on-top marker window centered on that display. All markers live on
//! one auxiliary UI thread and close together when a single one-shot timer
//! fires; the caller blocks until that thread has exited.
//!
//! ```no_run
//! use dispctl::{IdentifyConfig, displays, identify};
//! use std::time::Duration;
//!
//! let config = IdentifyConfig::default().with_duration(Duration::from_secs(5));
//! identify(&displays(), &config).expect("identify failed");
//! ```

use crate::cursor::ensure_dpi_awareness;
use crate::display::{DisplayApi, DisplayDevice, Point, Rect};
use crate::error::{Error, Result};
use std::thread;
use std::time::Duration;

/// How long markers stay on screen by default.
pub const DEFAULT_IDENTIFY_DURATION: Duration = Duration::from_secs(30);

/// Default marker window size.
pub const DEFAULT_MARKER_SIZE: MarkerSize = MarkerSize {
    width: 300,
    height: 300,
};

/// Size of a marker window in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

/// Options for an identification session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyConfig {
    /// Time until every marker is closed.
    pub duration: Duration,
    /// Requested marker size; clamped to each display's bounds.
    pub marker_size: MarkerSize,
}

impl Default for IdentifyConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_IDENTIFY_DURATION,
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }
}

impl IdentifyConfig {
    /// Set how long the markers stay on screen.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the marker window size.
    pub fn with_marker_size(mut self, width: i32, height: i32) -> Self {
        self.marker_size = MarkerSize { width, height };
        self
    }
}

/// One marker window: the display's ordinal and where to put it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// 1-based position of the display in enumeration order.
    pub ordinal: usize,
    /// Marker window rectangle in virtual-desktop coordinates.
    pub rect: Rect,
}

/// Owner of the marker windows for one session.
///
/// `run` is called on the auxiliary UI thread. It must show every marker,
/// close all of them together once `lifetime` has elapsed and return only
/// after its event loop has ended.
pub trait MarkerHost: Send + 'static {
    /// Show `markers` for `lifetime`, then tear them all down.
    fn run(self, markers: Vec<Marker>, lifetime: Duration) -> Result<()>;
}

/// Top-left corner of a marker of `size` centered on `display`.
pub fn marker_origin(display: Rect, size: MarkerSize) -> Point {
    Point::new(
        display.x + (display.width - size.width).div_euclid(2),
        display.y + (display.height - size.height).div_euclid(2),
    )
}

/// Compute one centered marker per display.
pub fn layout_markers(displays: &[DisplayDevice], size: MarkerSize) -> Vec<Marker> {
    displays
        .iter()
        .enumerate()
        .map(|(i, display)| {
            let bounds = display.bounds;
            let fitted = MarkerSize {
                width: size.width.clamp(0, bounds.width.max(0)),
                height: size.height.clamp(0, bounds.height.max(0)),
            };
            let origin = marker_origin(bounds, fitted);
            Marker {
                ordinal: i + 1,
                rect: Rect::new(origin.x, origin.y, fitted.width, fitted.height),
            }
        })
        .collect()
}

/// Show identification markers on every display using the native host.
///
/// Blocks until the markers have been closed.
pub fn identify(displays: &[DisplayDevice], config: &IdentifyConfig) -> Result<()> {
    identify_on(
        &crate::platform::NativeDisplay,
        crate::platform::NativeMarkerHost,
        displays,
        config,
    )
}

/// Enable DPI awareness through `api`, then run [`identify_with`].
///
/// Marker rectangles come from the display modes, which are in physical
/// pixels; a DPI-unaware process would have them rescaled.
pub fn identify_on<A: DisplayApi, H: MarkerHost>(
    api: &A,
    host: H,
    displays: &[DisplayDevice],
    config: &IdentifyConfig,
) -> Result<()> {
    ensure_dpi_awareness(api);
    identify_with(host, displays, config)
}

/// Show identification markers through `host` on a dedicated UI thread.
///
/// Blocks until the UI thread exits. There is no way to end the session
/// before the timer fires.
pub fn identify_with<H: MarkerHost>(
    host: H,
    displays: &[DisplayDevice],
    config: &IdentifyConfig,
) -> Result<()> {
    let markers = layout_markers(displays, config.marker_size);
    if markers.is_empty() {
        log::info!("no displays to identify");
        return Ok(());
    }

    log::info!(
        "identifying {} display(s) for {:?}",
        markers.len(),
        config.duration
    );

    let lifetime = config.duration;
    let handle = thread::Builder::new()
        .name("dispctl-identify".into())
        .spawn(move || host.run(markers, lifetime))
        .map_err(|e| Error::Thread(format!("failed to spawn identify thread: {e}")))?;

    handle
        .join()
        .map_err(|_| Error::Thread("identify thread panicked".into()))?
}

/// Async variant of [`identify`], awaiting the UI loop as a blocking task.
#[cfg(feature = "tokio")]
pub async fn identify_async(displays: &[DisplayDevice], config: &IdentifyConfig) -> Result<()> {
    ensure_dpi_awareness(&crate::platform::NativeDisplay);
    identify_async_with(crate::platform::NativeMarkerHost, displays, config).await
}

/// Async variant of [`identify_with`].
#[cfg(feature = "tokio")]
pub async fn identify_async_with<H: MarkerHost>(
    host: H,
    displays: &[DisplayDevice],
    config: &IdentifyConfig,
) -> Result<()> {
    let markers = layout_markers(displays, config.marker_size);
    if markers.is_empty() {
        return Ok(());
    }

    let lifetime = config.duration;
    tokio::task::spawn_blocking(move || host.run(markers, lifetime))
        .await
        .map_err(|e| Error::Thread(format!("identify task failed: {e}")))?
}
