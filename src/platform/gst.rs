//! GStreamer `playbin` media player.

use crate::error::{Error, Result};
use crate::playback::{MediaPlayer, PlaybackStatus};
use gst::MessageView;
use gst::prelude::*;
use gstreamer as gst;
use std::path::Path;

/// Video sinks tried in order; the first one that exists is used.
const VIDEO_SINKS: &[&str] = &["d3d11videosink", "autovideosink"];

/// Media player backed by a GStreamer `playbin` pipeline.
pub struct GstPlayer {
    playbin: gst::Element,
}

impl GstPlayer {
    /// Initialize GStreamer and create an empty `playbin`.
    pub fn new() -> Result<Self> {
        gst::init().map_err(|e| Error::Playback(format!("failed to initialize GStreamer: {e}")))?;
        let playbin = gst::ElementFactory::make("playbin")
            .build()
            .map_err(|e| Error::Playback(format!("playbin is not available: {e}")))?;

        Ok(Self { playbin })
    }
}

impl MediaPlayer for GstPlayer {
    fn open(&mut self, path: &Path) -> Result<()> {
        let absolute = std::path::absolute(path)?;
        let uri = gst::glib::filename_to_uri(&absolute, None)
            .map_err(|e| Error::Playback(format!("invalid media path {}: {e}", path.display())))?;
        log::debug!("playbin uri {uri}");
        self.playbin.set_property("uri", uri.as_str());
        Ok(())
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<()> {
        let mut rejected = None;
        for name in VIDEO_SINKS {
            let Ok(sink) = gst::ElementFactory::make(name).build() else {
                continue;
            };
            match configure_sink(&sink, fullscreen) {
                Ok(()) => {
                    log::debug!("video sink {name}");
                    self.playbin.set_property("video-sink", &sink);
                    return Ok(());
                }
                Err(e) => {
                    log::debug!("skipping video sink {name}: {e}");
                    rejected = Some(e);
                }
            }
        }

        if fullscreen {
            return Err(rejected
                .unwrap_or_else(|| Error::Playback("no full-screen video sink available".into())));
        }
        log::warn!("no video sink found, using the playbin default");
        Ok(())
    }

    fn set_target_display(&mut self, device: Option<&str>) -> Result<()> {
        if let Some(device) = device {
            // The sinks pick the monitor their window opens on.
            log::info!("target display {device} is advisory for GStreamer sinks");
        }
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.playbin
            .set_state(gst::State::Playing)
            .map_err(|e| Error::Playback(format!("failed to start playback: {e}")))?;
        Ok(())
    }

    fn wait_until_finished(&mut self) -> Result<PlaybackStatus> {
        let bus = self
            .playbin
            .bus()
            .ok_or_else(|| Error::Playback("playbin has no bus".into()))?;

        let mut status = None;
        for msg in bus.iter_timed(gst::ClockTime::NONE) {
            match msg.view() {
                MessageView::Eos(..) => {
                    status = Some(PlaybackStatus::Ended);
                    break;
                }
                MessageView::Error(err) => {
                    let message = match err.debug() {
                        Some(debug) => format!("{} ({debug})", err.error()),
                        None => err.error().to_string(),
                    };
                    status = Some(PlaybackStatus::Errored(message));
                    break;
                }
                _ => {}
            }
        }

        self.playbin
            .set_state(gst::State::Null)
            .map_err(|e| Error::Playback(format!("failed to stop pipeline: {e}")))?;

        status.ok_or_else(|| Error::Playback("bus closed before playback finished".into()))
    }
}

/// Put `sink` in or out of full-screen mode.
///
/// Sinks with a `fullscreen-toggle-mode` only honour the `fullscreen`
/// property once the mode includes `property`.
fn configure_sink(sink: &gst::Element, fullscreen: bool) -> Result<()> {
    if sink.find_property("fullscreen").is_none() {
        if fullscreen {
            return Err(Error::Playback(format!(
                "video sink {} has no full-screen mode",
                sink.name()
            )));
        }
        return Ok(());
    }

    if sink.find_property("fullscreen-toggle-mode").is_some() {
        sink.set_property_from_str("fullscreen-toggle-mode", "property");
    }
    sink.set_property("fullscreen", fullscreen);
    Ok(())
}

impl Drop for GstPlayer {
    fn drop(&mut self) {
        let _ = self.playbin.set_state(gst::State::Null);
    }
}
