//! Fluent construction of render props
//!
//! Mirrors how a page configures the map component: a marker list plus
//! optional center, zoom and height.

use crate::{
    core::{
        geo::{LatLng, LatLngBounds},
        height::HeightHint,
        map::MapProps,
    },
    layers::marker::Marker,
    Result,
};

/// Builder for [`MapProps`]
#[derive(Debug, Clone, Default)]
pub struct MapPropsBuilder {
    props: MapProps,
    height: Option<String>,
    center_on_markers: bool,
}

impl MapPropsBuilder {
    /// Create a builder with the dashboard defaults and no markers
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the marker list
    pub fn markers(mut self, markers: impl IntoIterator<Item = Marker>) -> Self {
        self.props.markers = markers.into_iter().collect();
        self
    }

    /// Append one marker
    pub fn marker(mut self, marker: Marker) -> Self {
        self.props.markers.push(marker);
        self
    }

    pub fn center(mut self, lat: f64, lng: f64) -> Self {
        self.props.center = LatLng::new(lat, lng);
        self
    }

    /// Center on the middle of the markers' bounding box instead; an empty
    /// marker list keeps the configured center
    pub fn center_on_markers(mut self) -> Self {
        self.center_on_markers = true;
        self
    }

    pub fn zoom(mut self, zoom: i32) -> Self {
        self.props.zoom = zoom;
        self
    }

    /// CSS-style container height, parsed on `build`
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn build(self) -> Result<MapProps> {
        let mut props = self.props;
        if let Some(height) = self.height {
            props.height = HeightHint::parse(&height)?;
        }
        if self.center_on_markers {
            if let Some(bounds) = LatLngBounds::from_points(props.markers.iter().map(Marker::position)) {
                props.center = bounds.center();
            }
        }
        Ok(props)
    }
}
