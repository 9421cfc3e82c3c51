//! Page-supplied configuration.
//!
//! The host page may embed a JSON block
//! (`<script type="application/json" id="gallery-config">`) overriding any of
//! the defaults below. Missing fields keep their default value.

use serde::Deserialize;

use crate::error::{GalleryError, Result};
use crate::particles::Rgba;
use crate::reveal::RevealOptions;

/// Id of the optional JSON config block in the host page.
pub const CONFIG_ELEMENT_ID: &str = "gallery-config";

/// Upper bound on per-axis drift, in px per frame.
pub const MAX_PARTICLE_SPEED: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub selectors: Selectors,
    pub reveal: RevealOptions,
    pub particles: ParticleConfig,
    pub log_level: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            reveal: RevealOptions::default(),
            particles: ParticleConfig::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a JSON config block.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(GalleryError::InvalidConfig(format!(
                "reveal.threshold must be within [0, 1], got {threshold}"
            )));
        }
        let margin = self.reveal.bottom_margin_px;
        if !margin.is_finite() || margin < 0.0 {
            return Err(GalleryError::InvalidConfig(format!(
                "reveal.bottom_margin_px must be a finite value >= 0, got {margin}"
            )));
        }
        let [min, max] = self.particles.radius;
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
            return Err(GalleryError::InvalidConfig(format!(
                "particles.radius must be an ascending non-negative range, got [{min}, {max}]"
            )));
        }
        if !(0.0..=MAX_PARTICLE_SPEED).contains(&self.particles.max_speed)
            || !(0.0..=1.0).contains(&self.particles.max_alpha)
        {
            return Err(GalleryError::InvalidConfig(format!(
                "particles.max_speed must be within [0, {MAX_PARTICLE_SPEED}] and particles.max_alpha within [0, 1]"
            )));
        }
        Ok(())
    }

    /// Configured level, falling back to `Info` on unknown names.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Ids and CSS selectors forming the page markup contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub modal_id: String,
    pub modal_image_id: String,
    pub modal_title_id: String,
    pub modal_description_id: String,
    pub close: String,
    pub item: String,
    pub item_image: String,
    pub item_title: String,
    pub item_description: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            modal_id: "imageModal".to_owned(),
            modal_image_id: "modalImg".to_owned(),
            modal_title_id: "modalTitle".to_owned(),
            modal_description_id: "modalDescription".to_owned(),
            close: ".close".to_owned(),
            item: ".gallery-item".to_owned(),
            item_image: ".image".to_owned(),
            item_title: ".overlay-content h3".to_owned(),
            item_description: ".overlay-content p".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// The background effect is decorative and off unless the page asks for it.
    pub enabled: bool,
    pub count: usize,
    /// `[min, max]` disc radius in CSS pixels.
    pub radius: [f64; 2],
    /// Per-axis speed is drawn from `[-max_speed, max_speed]` px/frame.
    pub max_speed: f64,
    /// Alpha is drawn from `[0, max_alpha]`.
    pub max_alpha: f64,
    pub color: [u8; 3],
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            count: 30,
            radius: [0.5, 2.5],
            max_speed: 0.25,
            max_alpha: 0.2,
            color: [102, 126, 234],
        }
    }
}

impl ParticleConfig {
    pub fn base_color(&self) -> Rgba {
        let [r, g, b] = self.color;
        Rgba::new(r, g, b, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let config = GalleryConfig::from_json("{}").unwrap();
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.particles.count, 30);
        assert_eq!(config.reveal.root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = GalleryConfig::from_json(
            r##"{ "particles": { "enabled": true }, "selectors": { "close": "#close" } }"##,
        )
        .unwrap();
        assert!(config.particles.enabled);
        assert_eq!(config.particles.count, 30);
        assert_eq!(config.selectors.close, "#close");
        assert_eq!(config.selectors.modal_id, "imageModal");
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = GalleryConfig::from_json("{ particles: ").unwrap_err();
        assert!(matches!(err, GalleryError::Config(_)));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = GalleryConfig::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, GalleryError::InvalidConfig(_)));
    }

    #[test]
    fn inverted_radius_range_is_rejected() {
        let err =
            GalleryConfig::from_json(r#"{ "particles": { "radius": [3.0, 1.0] } }"#).unwrap_err();
        assert!(matches!(err, GalleryError::InvalidConfig(_)));
    }

    #[test]
    fn negative_bottom_margin_is_rejected() {
        let err = GalleryConfig::from_json(r#"{ "reveal": { "bottom_margin_px": -10 } }"#)
            .unwrap_err();
        assert!(matches!(err, GalleryError::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn zero_bottom_margin_is_accepted() {
        let config =
            GalleryConfig::from_json(r#"{ "reveal": { "bottom_margin_px": 0 } }"#).unwrap();
        assert_eq!(config.reveal.root_margin(), "0px 0px -0px 0px");
    }

    #[test]
    fn runaway_particle_speed_is_rejected() {
        let err = GalleryConfig::from_json(r#"{ "particles": { "max_speed": 1e9 } }"#).unwrap_err();
        assert!(matches!(err, GalleryError::InvalidConfig(_)));
        let err = GalleryConfig::from_json(r#"{ "particles": { "max_speed": -1 } }"#).unwrap_err();
        assert!(matches!(err, GalleryError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let mut config = GalleryConfig::default();
        config.log_level = "loud".into();
        assert_eq!(config.level(), log::Level::Info);
        config.log_level = "debug".into();
        assert_eq!(config.level(), log::Level::Debug);
    }
}
