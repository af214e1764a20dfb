//! Configuration of the map's look and projection
//!
//! `RenderConfig::default()` reproduces the dashboard map exactly. A JSON
//! file (for instance pointed to by `TRACKLY_MAP_CONFIG`) can override any
//! subset of the fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    core::constants::*,
    layers::marker::MarkerSize,
    rendering::{color::Color, context::TextAlign},
    MapError, Result,
};

/// Environment variable naming a JSON render configuration file
pub const CONFIG_ENV_VAR: &str = "TRACKLY_MAP_CONFIG";

/// How geographic coordinates become surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Fixed pixels-per-degree around the center. Zoom is accepted but unused.
    #[default]
    Equirectangular,
    /// Web Mercator (EPSG:3857) at the view's zoom level
    WebMercator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapStyle {
    pub background_color: Color,
    pub grid_color: Color,
    pub grid_spacing_px: u32,
    pub grid_line_width: f32,
    pub shadow_color: Color,
    pub shadow_offset: f32,
    pub marker_stroke_color: Color,
    pub marker_stroke_width: f32,
    pub label_color: Color,
    pub label_font_size: f32,
    pub label_font_family: String,
    pub label_gap: f32,
    /// Horizontal anchoring of labels around the point above the glyph
    pub label_align: TextAlign,
    pub radius_small: f32,
    pub radius_medium: f32,
    pub radius_large: f32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            background_color: BACKGROUND_COLOR,
            grid_color: GRID_COLOR,
            grid_spacing_px: GRID_SPACING_PX,
            grid_line_width: GRID_LINE_WIDTH_PX,
            shadow_color: SHADOW_COLOR,
            shadow_offset: MARKER_SHADOW_OFFSET_PX,
            marker_stroke_color: MARKER_STROKE_COLOR,
            marker_stroke_width: MARKER_STROKE_WIDTH_PX,
            label_color: LABEL_COLOR,
            label_font_size: LABEL_FONT_SIZE_PX,
            label_font_family: LABEL_FONT_FAMILY.to_string(),
            label_gap: LABEL_GAP_PX,
            label_align: TextAlign::Center,
            radius_small: MARKER_RADIUS_SMALL,
            radius_medium: MARKER_RADIUS_MEDIUM,
            radius_large: MARKER_RADIUS_LARGE,
        }
    }
}

impl MapStyle {
    /// Glyph radius for a size class under this style
    pub fn radius_for(&self, size: MarkerSize) -> f32 {
        match size {
            MarkerSize::Small => self.radius_small,
            MarkerSize::Medium => self.radius_medium,
            MarkerSize::Large => self.radius_large,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub style: MapStyle,
    pub projection: ProjectionKind,
    /// Only used by the equirectangular projection
    pub scale_px_per_degree: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: MapStyle::default(),
            projection: ProjectionKind::default(),
            scale_px_per_degree: SCALE_PX_PER_DEGREE,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load the file named by `TRACKLY_MAP_CONFIG`, or the defaults when it is unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::debug!("loading render config from {:?}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let style = &self.style;
        if style.grid_spacing_px == 0 {
            return Err(MapError::Config("grid_spacing_px must be positive".into()));
        }
        if !(self.scale_px_per_degree.is_finite() && self.scale_px_per_degree > 0.0) {
            return Err(MapError::Config(
                "scale_px_per_degree must be a positive number".into(),
            ));
        }
        if !(style.label_font_size.is_finite() && style.label_font_size > 0.0) {
            return Err(MapError::Config("label_font_size must be positive".into()));
        }
        let radii = [style.radius_small, style.radius_medium, style.radius_large];
        if radii.iter().any(|r| !(r.is_finite() && *r > 0.0)) {
            return Err(MapError::Config("marker radii must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_dashboard_map() {
        let config = RenderConfig::default();
        assert_eq!(config.scale_px_per_degree, 5000.0);
        assert_eq!(config.projection, ProjectionKind::Equirectangular);
        assert_eq!(config.style.grid_spacing_px, 50);
        assert_eq!(config.style.background_color.to_string(), "#f5f5f5");
        assert_eq!(config.style.grid_color.to_string(), "#e0e0e0");
        assert_eq!(config.style.radius_for(MarkerSize::Large), 12.0);
        assert_eq!(config.style.radius_for(MarkerSize::Medium), 8.0);
        assert_eq!(config.style.radius_for(MarkerSize::Small), 6.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = RenderConfig::from_json_str(
            r##"{ "projection": "web_mercator", "style": { "grid_color": "#cccccc" } }"##,
        )
        .unwrap();

        assert_eq!(config.projection, ProjectionKind::WebMercator);
        assert_eq!(config.style.grid_color, Color::rgb(0xcc, 0xcc, 0xcc));
        assert_eq!(config.style.label_align, TextAlign::Center);
        assert_eq!(config.style.grid_spacing_px, 50);
        assert_eq!(config.scale_px_per_degree, 5000.0);
    }

    #[test]
    fn test_validation_rejects_zero_spacing() {
        let err = RenderConfig::from_json_str(r#"{ "style": { "grid_spacing_px": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
    }

    #[test]
    fn test_validation_rejects_bad_scale() {
        let mut config = RenderConfig::default();
        config.scale_px_per_degree = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_color_is_a_serialization_error() {
        let err = RenderConfig::from_json_str(r#"{ "style": { "label_color": "blue-ish" } }"#)
            .unwrap_err();
        assert!(matches!(err, MapError::Serialization(_)));
    }
}
