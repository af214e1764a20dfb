use serde::{Deserialize, Serialize};

use crate::core::constants::MAX_MERCATOR_LATITUDE;

const EARTH_RADIUS: f64 = 6378137.0;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Calculates the distance in meters to another LatLng using the Haversine formula
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Clamps latitude to the range Web Mercator can represent
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        let (lat, lng) = crate::core::constants::DEFAULT_CENTER;
        Self::new(lat, lng)
    }
}

/// Represents a point in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Smallest bounds containing every point, `None` for an empty iterator
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(first, first);
        for point in points {
            bounds.extend(&point);
        }
        Some(bounds)
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(19.4326, -99.1332);
        assert_eq!(coord.lat, 19.4326);
        assert_eq!(coord.lng, -99.1332);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_lat_lng_rejects_nan_and_out_of_range() {
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
        assert!(!LatLng::new(0.0, f64::INFINITY).is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn test_default_is_city_center() {
        let center = LatLng::default();
        assert_eq!(center, LatLng::new(19.4326, -99.1332));
    }

    #[test]
    fn test_lat_lng_distance() {
        let centro = LatLng::new(19.4326, -99.1332);
        let roma = LatLng::new(19.4207, -99.1639);
        let distance = centro.distance_to(&roma);

        // Roughly 3.5 km across the city
        assert!((distance - 3500.0).abs() < 300.0);
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = LatLngBounds::from_points([
            LatLng::new(19.42, -99.12),
            LatLng::new(19.442, -99.145),
            LatLng::new(19.4326, -99.1332),
        ])
        .unwrap();

        assert_eq!(bounds.south_west, LatLng::new(19.42, -99.145));
        assert_eq!(bounds.north_east, LatLng::new(19.442, -99.12));
        assert!(bounds.contains(&LatLng::new(19.43, -99.13)));
        assert!(!bounds.contains(&LatLng::new(19.5, -99.13)));
        assert!(LatLngBounds::from_points(Vec::new()).is_none());
    }
}
