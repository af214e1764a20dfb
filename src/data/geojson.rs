//! GeoJSON point features as markers.
//!
//! Styling follows the simplestyle properties `marker-color` and
//! `marker-size` (`small` / `medium` / `large`); the label comes from
//! `label`, `title` or `name`, in that order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    layers::marker::{Marker, MarkerSize},
    MapError, Result,
};

/// Marker color for features without `marker-color`
pub const DEFAULT_MARKER_COLOR: &str = "#3388ff";

/// GeoJSON geometry; only points become markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point { coordinates: Vec<f64> },
    MultiPoint { coordinates: Vec<Vec<f64>> },
    #[serde(other)]
    Unsupported,
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

impl GeoJsonFeature {
    fn property(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key)?.as_str()
    }

    fn label(&self) -> String {
        ["label", "title", "name"]
            .iter()
            .find_map(|key| self.property(key))
            .unwrap_or_default()
            .to_string()
    }

    fn invalid(&self, index: usize, reason: String) -> MapError {
        MapError::Validation {
            index,
            label: self.label(),
            reason,
        }
    }

    fn size(&self, index: usize) -> Result<MarkerSize> {
        match self.property("marker-size") {
            None | Some("medium") => Ok(MarkerSize::Medium),
            Some("small") => Ok(MarkerSize::Small),
            Some("large") => Ok(MarkerSize::Large),
            Some(other) => Err(self.invalid(index, format!("unknown marker-size {other:?}"))),
        }
    }

    /// Markers for this feature, in coordinate order; non-point geometries yield none.
    /// `index` is the feature's position in its collection, used in errors.
    pub fn to_markers(&self, index: usize) -> Result<Vec<Marker>> {
        let positions: Vec<&Vec<f64>> = match &self.geometry {
            Some(GeoJsonGeometry::Point { coordinates }) => vec![coordinates],
            Some(GeoJsonGeometry::MultiPoint { coordinates }) => coordinates.iter().collect(),
            _ => return Ok(Vec::new()),
        };

        let label = self.label();
        let color = self
            .property("marker-color")
            .unwrap_or(DEFAULT_MARKER_COLOR)
            .to_string();
        let size = self.size(index)?;

        positions
            .into_iter()
            .map(|position| match position.as_slice() {
                // GeoJSON positions are [longitude, latitude, (elevation)]
                [lng, lat, ..] => {
                    Ok(Marker::new(*lat, *lng, label.clone(), color.clone()).with_size(size))
                }
                _ => Err(self.invalid(
                    index,
                    format!("position needs longitude and latitude, got {position:?}"),
                )),
            })
            .collect()
    }
}

/// Parse a GeoJSON document into markers, validating each one
pub fn markers_from_geojson_str(json: &str) -> Result<Vec<Marker>> {
    let data: GeoJson = serde_json::from_str(json)?;
    let features = match data {
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::FeatureCollection { features } => features,
    };

    let mut markers = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        markers.extend(feature.to_markers(index)?);
    }
    for (index, marker) in markers.iter().enumerate() {
        marker.validate(index)?;
    }

    log::debug!(
        "{} markers from {} GeoJSON features",
        markers.len(),
        features.len()
    );
    Ok(markers)
}
