//! # trackly-map
//!
//! Marker map renderer for the Trackly urban analytics dashboards.
//!
//! A render pass takes a list of [`Marker`]s, a center coordinate and a zoom
//! level, projects every marker onto a drawing surface and repaints it: a
//! light background, a 50px grid, marker glyphs and their labels. Surfaces
//! are pluggable: a raster image (`render`), an egui painter (`egui`) or a
//! browser canvas (`wasm`).

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod rendering;
#[cfg(feature = "egui")]
pub mod ui;
#[cfg(feature = "wasm")]
pub mod web;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::MapPropsBuilder,
    config::{MapStyle, ProjectionKind, RenderConfig},
    geo::{LatLng, LatLngBounds, Point},
    height::HeightHint,
    map::{MapProps, MarkerMap, RenderReport},
    viewport::ViewState,
};

pub use layers::{
    base::Layer,
    grid::GridLayer,
    marker::{Marker, MarkerLayer, MarkerSize},
};

pub use rendering::{
    color::Color,
    context::{DrawCommand, RenderContext},
    surface::{RecordingSurface, Surface},
};

#[cfg(feature = "render")]
pub use rendering::raster::RasterSurface;

#[cfg(feature = "egui")]
pub use ui::widget::InteractiveMap;

pub use data::presets::MarkerPreset;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid marker {index} ({label:?}): {reason}")]
    Validation {
        index: usize,
        label: String,
        reason: String,
    },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid height: {0}")]
    InvalidHeight(String),

    #[error("Drawing surface is not ready")]
    SurfaceNotReady,

    #[error("Configuration error: {0}")]
    Config(String),

    #[cfg(feature = "render")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Error type alias for convenience
pub type Error = MapError;
