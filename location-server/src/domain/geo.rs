//! Coordinates, great-circle distance and bounding boxes.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Bounding box for the supported country (Great Britain and Northern Ireland).
pub const UK_BOUNDS: BoundingBox = BoundingBox {
    min_lng: -8.65,
    min_lat: 49.86,
    max_lng: 1.77,
    max_lat: 60.86,
};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create a point from latitude and longitude in degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build from a provider `[lng, lat]` pair.
    pub fn from_lng_lat(center: [f64; 2]) -> Self {
        Self {
            lat: center[1],
            lng: center[0],
        }
    }

    /// Whether this is a usable location.
    ///
    /// Both components must be finite and in range. `(0, 0)` means "no location".
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
            && !(self.lat == 0.0 && self.lng == 0.0)
    }

    /// Great-circle distance to another point in kilometres.
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance_km(self.lat, self.lng, other.lat, other.lng)
    }

    /// Format as the provider's `lng,lat` proximity parameter.
    pub fn to_proximity_param(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }
}

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Haversine distance between two points, in kilometres.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = to_radians(lat2 - lat1);
    let d_lon = to_radians(lon2 - lon1);

    let a = (d_lat / 2.0).sin().powi(2)
        + to_radians(lat1).cos() * to_radians(lat2).cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Axis-aligned longitude/latitude box.
///
/// The map widget fits its viewport to the box covering the current
/// suggestions; the geocoding client uses [`UK_BOUNDS`] to restrict results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Smallest box enclosing every point, or `None` for no points.
    pub fn covering<'a>(points: impl IntoIterator<Item = &'a Coordinates>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self {
                    min_lng: p.lng,
                    min_lat: p.lat,
                    max_lng: p.lng,
                    max_lat: p.lat,
                },
                Some(b) => Self {
                    min_lng: b.min_lng.min(p.lng),
                    min_lat: b.min_lat.min(p.lat),
                    max_lng: b.max_lng.max(p.lng),
                    max_lat: b.max_lat.max(p.lat),
                },
            })
        })
    }

    /// Whether the point lies inside the box (edges inclusive).
    pub fn contains(&self, point: &Coordinates) -> bool {
        (self.min_lng..=self.max_lng).contains(&point.lng)
            && (self.min_lat..=self.max_lat).contains(&point.lat)
    }

    /// Format as the provider's `minLng,minLat,maxLng,maxLat` parameter.
    pub fn to_query_param(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lng, self.min_lat, self.max_lng, self.max_lat
        )
    }
}
