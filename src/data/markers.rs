//! Loading marker lists and render props from JSON.

use std::path::Path;

use crate::{core::map::MapProps, layers::marker::Marker, Result};

/// Parse a JSON array of markers, validating each one
pub fn markers_from_json_str(json: &str) -> Result<Vec<Marker>> {
    let markers: Vec<Marker> = serde_json::from_str(json)?;
    validate_all(&markers)?;
    Ok(markers)
}

/// Parse full render props (`{ "markers": [...], "center": .., "zoom": .., "height": .. }`)
pub fn props_from_json_str(json: &str) -> Result<MapProps> {
    let props: MapProps = serde_json::from_str(json)?;
    validate_all(&props.markers)?;
    Ok(props)
}

/// Load render props from a file. A bare marker array is accepted too and
/// gets the default center, zoom and height.
pub fn props_from_file<P: AsRef<Path>>(path: P) -> Result<MapProps> {
    let json = std::fs::read_to_string(path.as_ref())?;
    log::debug!("loading map props from {}", path.as_ref().display());

    if json.trim_start().starts_with('[') {
        Ok(MapProps::new(markers_from_json_str(&json)?))
    } else {
        props_from_json_str(&json)
    }
}

fn validate_all(markers: &[Marker]) -> Result<()> {
    for (index, marker) in markers.iter().enumerate() {
        marker.validate(index)?;
    }
    Ok(())
}
