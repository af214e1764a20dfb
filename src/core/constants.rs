//! Core constants of the dashboard marker map.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

use crate::rendering::color::Color;

/// Linear projection scale, in pixels per degree of latitude/longitude.
pub const SCALE_PX_PER_DEGREE: f64 = 5000.0;

/// Distance between background grid lines, both axes.
pub const GRID_SPACING_PX: u32 = 50;

/// Width of a background grid line.
pub const GRID_LINE_WIDTH_PX: f32 = 1.0;

/// Marker radius for `size = "large"`.
pub const MARKER_RADIUS_LARGE: f32 = 12.0;

/// Marker radius for `size = "medium"` (and markers without a size).
pub const MARKER_RADIUS_MEDIUM: f32 = 8.0;

/// Marker radius for `size = "small"`.
pub const MARKER_RADIUS_SMALL: f32 = 6.0;

/// Drop shadow offset from the glyph center, applied to both axes.
pub const MARKER_SHADOW_OFFSET_PX: f32 = 2.0;

/// Width of the white outline drawn around each glyph.
pub const MARKER_STROKE_WIDTH_PX: f32 = 2.0;

/// Gap between the top of a glyph and its label baseline.
pub const LABEL_GAP_PX: f32 = 5.0;

/// Label font size (sans-serif).
pub const LABEL_FONT_SIZE_PX: f32 = 12.0;

/// Label font family, in CSS font shorthand terms.
pub const LABEL_FONT_FAMILY: &str = "sans-serif";

/// Mexico City historic center, the reference point of every dashboard.
pub const DEFAULT_CENTER: (f64, f64) = (19.4326, -99.1332);

/// Zoom level handed to the map when the caller gives none.
pub const DEFAULT_ZOOM: i32 = 12;

/// Container height when the caller gives none.
pub const DEFAULT_HEIGHT: &str = "500px";

/// Map background fill, `#f5f5f5`.
pub const BACKGROUND_COLOR: Color = Color::rgb(0xf5, 0xf5, 0xf5);
/// Grid line color, `#e0e0e0`.
pub const GRID_COLOR: Color = Color::rgb(0xe0, 0xe0, 0xe0);
/// Marker drop shadow, `rgba(0, 0, 0, 0.2)`.
pub const SHADOW_COLOR: Color = Color::rgba(0, 0, 0, 51);
pub const MARKER_STROKE_COLOR: Color = Color::WHITE;
/// Label text color, `#1a1a1a`.
pub const LABEL_COLOR: Color = Color::rgb(0x1a, 0x1a, 0x1a);

/// World size in pixels at zoom 0 for the Web Mercator projection.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web Mercator projection.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.0511287798;
