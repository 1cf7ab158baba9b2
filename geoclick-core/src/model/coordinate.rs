use serde::Serialize;

use super::ModelError;

/// a geographic (latitude, longitude) pair in EPSG:4326 degrees.
///
/// map widgets hand out coordinates lat-first while OGC/GeoJSON payloads
/// store them lng-first. this type is the lat-first side of that boundary;
/// see [`Coordinate::lng_lat`] for the protocol order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub const MAX_LAT: f64 = 90.0;
    pub const MAX_LNG: f64 = 180.0;

    /// creates a coordinate, rejecting values outside of [-90, 90] x [-180, 180]
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, ModelError> {
        let lat_ok = lat.is_finite() && (-Self::MAX_LAT..=Self::MAX_LAT).contains(&lat);
        let lng_ok = lng.is_finite() && (-Self::MAX_LNG..=Self::MAX_LNG).contains(&lng);
        if !lat_ok || !lng_ok {
            return Err(ModelError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// position in GeoJSON axis order
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// "lat, lng" with a fixed number of decimal places
    pub fn format_fixed(&self, decimals: usize) -> String {
        format!(
            "{:.prec$}, {:.prec$}",
            self.lat,
            self.lng,
            prec = decimals
        )
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(value: Coordinate) -> Self {
        geo::Point::new(value.lng, value.lat)
    }
}

impl TryFrom<geo::Point<f64>> for Coordinate {
    type Error = ModelError;

    fn try_from(value: geo::Point<f64>) -> Result<Self, Self::Error> {
        Coordinate::try_new(value.y(), value.x())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}
