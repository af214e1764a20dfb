//! Prelude module for common trackly-map types and traits
//!
//! `use trackly_map::prelude::*;`

pub use crate::core::{
    builder::MapPropsBuilder,
    config::{MapStyle, ProjectionKind, RenderConfig},
    geo::{LatLng, LatLngBounds, Point},
    height::HeightHint,
    map::{MapProps, MarkerMap, RenderReport},
    viewport::ViewState,
};

pub use crate::layers::{
    base::{Layer, LayerStack},
    grid::GridLayer,
    marker::{Marker, MarkerLayer, MarkerSize, ProjectedMarker},
};

pub use crate::data::{
    geojson::markers_from_geojson_str,
    markers::{markers_from_json_str, props_from_file, props_from_json_str},
    presets::MarkerPreset,
};

pub use crate::rendering::{
    color::Color,
    context::{DrawCommand, RenderContext},
    surface::{RecordingSurface, Surface},
};

#[cfg(feature = "render")]
pub use crate::rendering::raster::RasterSurface;

#[cfg(feature = "egui")]
pub use crate::ui::{widget::InteractiveMap, UiMapExt};

#[cfg(feature = "wasm")]
pub use crate::web::CanvasSurface;

pub use crate::{MapError, Result};
