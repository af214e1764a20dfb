pub mod geojson;
pub mod markers;
pub mod presets;
