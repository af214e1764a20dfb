use serde::{Deserialize, Serialize};

use crate::core::{
    config::ProjectionKind,
    constants::{SCALE_PX_PER_DEGREE, TILE_SIZE},
    geo::{LatLng, Point},
};

const EARTH_RADIUS: f64 = 6378137.0;

/// View parameters of one render pass: what is centered, at which zoom, on how many pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    pub zoom: i32,
    pub surface_width_px: u32,
    pub surface_height_px: u32,
    #[serde(default)]
    pub projection: ProjectionKind,
    #[serde(default = "default_scale")]
    pub scale_px_per_degree: f64,
}

fn default_scale() -> f64 {
    SCALE_PX_PER_DEGREE
}

impl ViewState {
    /// Equirectangular view at the default scale
    pub fn new(center: LatLng, zoom: i32, surface_width_px: u32, surface_height_px: u32) -> Self {
        Self {
            center,
            zoom,
            surface_width_px,
            surface_height_px,
            projection: ProjectionKind::Equirectangular,
            scale_px_per_degree: SCALE_PX_PER_DEGREE,
        }
    }

    pub fn with_projection(mut self, projection: ProjectionKind) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_scale(mut self, scale_px_per_degree: f64) -> Self {
        self.scale_px_per_degree = scale_px_per_degree;
        self
    }

    /// Pixel position of the view center on the surface
    pub fn surface_center(&self) -> Point {
        Point::new(
            self.surface_width_px as f64 / 2.0,
            self.surface_height_px as f64 / 2.0,
        )
    }

    /// Converts a geographical coordinate to surface pixel coordinates
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let origin = self.surface_center();
        match self.projection {
            ProjectionKind::Equirectangular => Point::new(
                origin.x + (lat_lng.lng - self.center.lng) * self.scale_px_per_degree,
                origin.y - (lat_lng.lat - self.center.lat) * self.scale_px_per_degree,
            ),
            ProjectionKind::WebMercator => {
                let offset = self
                    .mercator_world_pixel(lat_lng)
                    .subtract(&self.mercator_world_pixel(&self.center));
                origin.add(&offset)
            }
        }
    }

    /// Converts surface pixel coordinates back to geographical coordinates
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let origin = self.surface_center();
        match self.projection {
            ProjectionKind::Equirectangular => LatLng::new(
                self.center.lat - (pixel.y - origin.y) / self.scale_px_per_degree,
                self.center.lng + (pixel.x - origin.x) / self.scale_px_per_degree,
            ),
            ProjectionKind::WebMercator => {
                let world = self
                    .mercator_world_pixel(&self.center)
                    .add(&pixel.subtract(&origin));
                self.mercator_unproject(&world)
            }
        }
    }

    fn world_size(&self) -> f64 {
        TILE_SIZE * 2_f64.powi(self.zoom)
    }

    /// Web Mercator (EPSG:3857) world pixel at the view's zoom
    fn mercator_world_pixel(&self, lat_lng: &LatLng) -> Point {
        use std::f64::consts::PI;

        let scale = self.world_size();
        let lat = LatLng::clamp_lat(lat_lng.lat);
        let x = lat_lng.lng.to_radians() * EARTH_RADIUS;
        let y = (PI / 4.0 + lat.to_radians() / 2.0).tan().ln() * EARTH_RADIUS;

        Point::new(
            (x + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale,
            (-y + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale,
        )
    }

    fn mercator_unproject(&self, world: &Point) -> LatLng {
        use std::f64::consts::PI;

        let scale = self.world_size();
        let x = (world.x / scale) * (2.0 * PI * EARTH_RADIUS) - PI * EARTH_RADIUS;
        let y = PI * EARTH_RADIUS - (world.y / scale) * (2.0 * PI * EARTH_RADIUS);

        LatLng::new(
            (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees(),
            (x / EARTH_RADIUS).to_degrees(),
        )
    }
}
