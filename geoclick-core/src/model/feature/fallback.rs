use chrono::{DateTime, TimeZone};
use geojson::{Feature, Geometry, JsonObject, JsonValue, Value};

use crate::model::Coordinate;

pub const FALLBACK_COORDINATE_DECIMALS: usize = 6;

const FALLBACK_NAME: &str = "Test feature";
const FALLBACK_DESCRIPTION: &str = "Demonstration feature created at the clicked location";

/// synthesizes the feature shown when no WFS source is configured for the
/// session: a Point at the clicked location plus a label, the formatted
/// coordinate and the capture time.
pub fn fallback_feature<Tz>(coordinate: &Coordinate, captured_at: &DateTime<Tz>) -> Feature
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), JsonValue::from(FALLBACK_NAME));
    properties.insert(
        "description".to_string(),
        JsonValue::from(FALLBACK_DESCRIPTION),
    );
    properties.insert(
        "coordinates".to_string(),
        JsonValue::from(coordinate.format_fixed(FALLBACK_COORDINATE_DECIMALS)),
    );
    properties.insert(
        "timestamp".to_string(),
        JsonValue::from(captured_at.format("%Y-%m-%d %H:%M:%S").to_string()),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(coordinate.lng_lat().to_vec()))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_fallback_geometry_is_lng_first() {
        let coord = Coordinate::try_new(55.7558, 37.6176).unwrap();
        let captured = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let feature = fallback_feature(&coord, &captured);

        let geometry = feature.geometry.as_ref().expect("fallback has geometry");
        assert_eq!(geometry.value, Value::Point(vec![37.6176, 55.7558]));
    }

    #[test]
    fn test_fallback_properties() {
        let coord = Coordinate::try_new(55.7558, 37.6176).unwrap();
        let captured = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let feature = fallback_feature(&coord, &captured);

        assert_eq!(
            feature.property("coordinates"),
            Some(&JsonValue::from("55.755800, 37.617600"))
        );
        assert_eq!(
            feature.property("timestamp"),
            Some(&JsonValue::from("2024-05-01 12:30:00"))
        );
        assert_eq!(feature.property("name"), Some(&JsonValue::from(FALLBACK_NAME)));
        assert!(feature.property("description").is_some());
    }
}
