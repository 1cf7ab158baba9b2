use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Coordinate, ModelError};

/// an EPSG:4326 extent in (min_lng, min_lat, max_lng, max_lat) order.
///
/// the constructors are plain formatters and do not check that min <= max.
/// viewport boxes handed over by a map widget may arrive in either
/// orientation, and the call site already knows which one it has. callers
/// that want a fail-fast check can use [`BoundingBox::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// the whole-world extent
    pub const WORLD: BoundingBox = BoundingBox {
        min_lng: -180.0,
        min_lat: -90.0,
        max_lng: 180.0,
        max_lat: 90.0,
    };

    /// square box of `buffer` degrees around a point. a zero buffer gives a
    /// degenerate zero-area box, which servers accept as a point filter.
    pub fn from_point(coordinate: &Coordinate, buffer: f64) -> Self {
        Self {
            min_lng: coordinate.lng() - buffer,
            min_lat: coordinate.lat() - buffer,
            max_lng: coordinate.lng() + buffer,
            max_lat: coordinate.lat() + buffer,
        }
    }

    pub fn from_extrema(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        }
    }

    /// the `minLng,minLat,maxLng,maxLat` form used in WMS/WFS `bbox` parameters
    pub fn serialize(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lng, self.min_lat, self.max_lng, self.max_lat
        )
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.max_lng < self.min_lng || self.max_lat < self.min_lat {
            return Err(ModelError::InvalidBoundingBox(format!(
                "extrema out of order: {}",
                self.serialize()
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.serialize())
    }
}

impl FromStr for BoundingBox {
    type Err = ModelError;

    /// parses `minLng,minLat,maxLng,maxLat`. ordering is not checked here either.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |message: String| ModelError::BoundingBoxParse {
            input: s.to_string(),
            message,
        };
        let values = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                match part.parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(v),
                    Ok(_) => Err(parse_err(format!("'{part}' is not a finite number"))),
                    Err(e) => Err(parse_err(format!("'{part}': {e}"))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        match values[..] {
            [min_lng, min_lat, max_lng, max_lat] => {
                Ok(Self::from_extrema(min_lng, min_lat, max_lng, max_lat))
            }
            _ => Err(parse_err(format!(
                "expected 4 comma-separated values, found {}",
                values.len()
            ))),
        }
    }
}

impl From<&BoundingBox> for geo::Rect<f64> {
    fn from(value: &BoundingBox) -> Self {
        geo::Rect::new(
            geo::coord! { x: value.min_lng, y: value.min_lat },
            geo::coord! { x: value.max_lng, y: value.max_lat },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moscow() -> Coordinate {
        Coordinate::try_new(55.7558, 37.6176).unwrap()
    }

    #[test]
    fn test_from_point_exact_components() {
        let buffer = 0.001;
        let bbox = BoundingBox::from_point(&moscow(), buffer);
        assert_eq!(bbox.min_lng, 37.6176 - buffer);
        assert_eq!(bbox.min_lat, 55.7558 - buffer);
        assert_eq!(bbox.max_lng, 37.6176 + buffer);
        assert_eq!(bbox.max_lat, 55.7558 + buffer);
    }

    #[test]
    fn test_serialize_field_order() {
        let bbox = BoundingBox::from_point(&moscow(), 0.001);
        let expected = format!(
            "{},{},{},{}",
            37.6176 - 0.001,
            55.7558 - 0.001,
            37.6176 + 0.001,
            55.7558 + 0.001
        );
        assert_eq!(bbox.serialize(), expected);
        assert!(!bbox.serialize().contains(' '));
    }

    #[test]
    fn test_zero_buffer_is_degenerate() {
        let bbox = BoundingBox::from_point(&moscow(), 0.0);
        assert_eq!(bbox.serialize(), "37.6176,55.7558,37.6176,55.7558");
        assert!(bbox.validate().is_ok());
    }

    #[test]
    fn test_from_extrema_passes_through_unordered() {
        let bbox = BoundingBox::from_extrema(10.0, 5.0, -10.0, -5.0);
        assert_eq!(bbox.serialize(), "10,5,-10,-5");
        assert!(bbox.validate().is_err());
    }

    #[test]
    fn test_world_extent() {
        assert_eq!(BoundingBox::WORLD.serialize(), "-180,-90,180,90");
    }

    #[test]
    fn test_serialized_values_reparse() {
        let bbox = BoundingBox::from_point(&moscow(), 0.001);
        let parsed = bbox.serialize().parse::<BoundingBox>().unwrap();
        assert_eq!(parsed, bbox);
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        let result = "1,2,3".parse::<BoundingBox>();
        assert!(matches!(result, Err(ModelError::BoundingBoxParse { .. })));
        assert!("1,2,3,x".parse::<BoundingBox>().is_err());
        assert!("1,2,3,inf".parse::<BoundingBox>().is_err());
    }

    #[test]
    fn test_parse_tolerates_field_whitespace() {
        let bbox = " -1.5, 2 ,3,4 ".parse::<BoundingBox>().unwrap();
        assert_eq!(bbox, BoundingBox::from_extrema(-1.5, 2.0, 3.0, 4.0));
    }
}
