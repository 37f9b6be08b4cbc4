//! Viewer settings read from the host page.
//!
//! The page may embed a JSON object in
//! `<script type="application/json" id="lightbox-config">`. Every field is
//! optional; anything missing falls back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::state::transform::{MAX_ZOOM, MIN_ZOOM};

pub const CONFIG_ELEMENT_ID: &str = "lightbox-config";

pub const DEFAULT_ZOOM_STEP: f64 = 0.1;
pub const DEFAULT_WHEEL_INTENSITY: f64 = 0.05;
pub const DEFAULT_TOGGLE_ZOOM: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub image_src: String,
    pub image_alt: String,
    pub max_zoom: f64,
    /// Scale change per zoom button press.
    pub zoom_step: f64,
    /// Wheel ticks multiply or divide the scale by `1 + wheel_intensity`.
    pub wheel_intensity: f64,
    /// Scale a click zooms to from 1:1.
    pub toggle_zoom: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_src: "assets/infographic.png".to_string(),
            image_alt: "Scholarship infographic".to_string(),
            max_zoom: MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            wheel_intensity: DEFAULT_WHEEL_INTENSITY,
            toggle_zoom: DEFAULT_TOGGLE_ZOOM,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let check = |field: &'static str, value: f64, ok: bool| {
            if ok && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange { field, value })
            }
        };
        check("maxZoom", self.max_zoom, self.max_zoom >= MIN_ZOOM)?;
        check("zoomStep", self.zoom_step, self.zoom_step > 0.0)?;
        check(
            "wheelIntensity",
            self.wheel_intensity,
            self.wheel_intensity > 0.0,
        )?;
        check(
            "toggleZoom",
            self.toggle_zoom,
            self.toggle_zoom > MIN_ZOOM && self.toggle_zoom <= self.max_zoom,
        )?;
        Ok(())
    }
}

/// Reads the config element from the current document, falling back to
/// defaults when it is absent or rejected.
pub fn load() -> ViewerConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        log::debug!("no #{CONFIG_ELEMENT_ID} element, using default viewer config");
        return ViewerConfig::default();
    };
    match ViewerConfig::from_json(&raw) {
        Ok(config) => {
            log::debug!("viewer config loaded: {config:?}");
            config
        }
        Err(e) => {
            log::warn!("{e}; using default viewer config");
            ViewerConfig::default()
        }
    }
}
