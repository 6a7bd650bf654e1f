//! Runtime configuration.
//!
//! Every field has a default taken from [`crate::consts`]. A page may override
//! any subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "scroll": { "navbar_scrolled_px": 80 }, "log_level": "debug" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::FolioError;

/// Visibility-detection inputs for one observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible, in `[0, 1]`.
    pub threshold: f64,
    /// CSS margin applied to the root (viewport) box.
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self { threshold: 0.0, root_margin: "0px".to_owned() }
    }
}

impl ObserverOptions {
    #[must_use]
    pub fn new(threshold: f64, root_margin: &str) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), root_margin: root_margin.to_owned() }
    }
}

/// Observer presets for each visibility-driven feature.
///
/// Deserialized as field-level overrides on top of [`ObserverPresets::default`],
/// so `{"reveal": {"threshold": 0.2}}` keeps the reveal margin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PresetOverrides")]
pub struct ObserverPresets {
    pub reveal: ObserverOptions,
    pub counter: ObserverOptions,
    pub progress: ObserverOptions,
    pub scroll_spy: ObserverOptions,
    pub lazy_image: ObserverOptions,
}

impl Default for ObserverPresets {
    fn default() -> Self {
        Self {
            reveal: ObserverOptions::new(0.1, "0px 0px -50px 0px"),
            counter: ObserverOptions::new(0.5, "0px"),
            progress: ObserverOptions::new(0.5, "0px"),
            scroll_spy: ObserverOptions::new(0.3, "-80px 0px -80px 0px"),
            lazy_image: ObserverOptions::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OptionsOverride {
    threshold: Option<f64>,
    root_margin: Option<String>,
}

impl OptionsOverride {
    fn apply(self, base: ObserverOptions) -> ObserverOptions {
        ObserverOptions {
            threshold: self.threshold.unwrap_or(base.threshold),
            root_margin: self.root_margin.unwrap_or(base.root_margin),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PresetOverrides {
    reveal: OptionsOverride,
    counter: OptionsOverride,
    progress: OptionsOverride,
    scroll_spy: OptionsOverride,
    lazy_image: OptionsOverride,
}

impl From<PresetOverrides> for ObserverPresets {
    fn from(overrides: PresetOverrides) -> Self {
        let base = Self::default();
        Self {
            reveal: overrides.reveal.apply(base.reveal),
            counter: overrides.counter.apply(base.counter),
            progress: overrides.progress.apply(base.progress),
            scroll_spy: overrides.scroll_spy.apply(base.scroll_spy),
            lazy_image: overrides.lazy_image.apply(base.lazy_image),
        }
    }
}

/// Scroll-derived UI thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub navbar_scrolled_px: f64,
    pub back_to_top_px: f64,
    pub parallax_base_speed: f64,
    pub parallax_speed_step: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_scrolled_px: consts::NAVBAR_SCROLLED_PX,
            back_to_top_px: consts::BACK_TO_TOP_PX,
            parallax_base_speed: consts::PARALLAX_BASE_SPEED,
            parallax_speed_step: consts::PARALLAX_SPEED_STEP,
        }
    }
}

/// Animation defaults used when elements carry no `data-duration`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub counter_duration_ms: f64,
    pub progress_duration_ms: f64,
    pub progress_start_delay_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: consts::COUNTER_DURATION_MS,
            progress_duration_ms: consts::PROGRESS_DURATION_MS,
            progress_start_delay_ms: consts::PROGRESS_START_DELAY_MS,
        }
    }
}

/// Relative paths of the HTML fragments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FragmentPaths {
    pub navbar: String,
    pub projects: String,
    pub footer: String,
}

impl Default for FragmentPaths {
    fn default() -> Self {
        Self {
            navbar: "./components/navbar.html".to_owned(),
            projects: "./components/projects.html".to_owned(),
            footer: "./components/footer.html".to_owned(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scroll: ScrollConfig,
    pub animation: AnimationConfig,
    pub observers: ObserverPresets,
    pub fragments: FragmentPaths,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            animation: AnimationConfig::default(),
            observers: ObserverPresets::default(),
            fragments: FragmentPaths::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Parse configuration from JSON; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if the JSON is malformed or a field has
    /// the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, FolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_json::from_str(raw)?;
        config.normalize();
        Ok(config)
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    fn normalize(&mut self) {
        for options in [
            &mut self.observers.reveal,
            &mut self.observers.counter,
            &mut self.observers.progress,
            &mut self.observers.scroll_spy,
            &mut self.observers.lazy_image,
        ] {
            options.threshold = options.threshold.clamp(0.0, 1.0);
        }
        if self.animation.counter_duration_ms <= 0.0 {
            self.animation.counter_duration_ms = consts::COUNTER_DURATION_MS;
        }
        if self.animation.progress_duration_ms <= 0.0 {
            self.animation.progress_duration_ms = consts::PROGRESS_DURATION_MS;
        }
    }

    /// Read the inline `#folio-config` block, falling back to defaults.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn load() -> Self {
        let raw = crate::dom::document()
            .and_then(|doc| doc.get_element_by_id(consts::CONFIG_SCRIPT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring inline configuration: {err}");
                Self::default()
            }
        }
    }
}
