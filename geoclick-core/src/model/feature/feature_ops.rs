use geojson::{Feature, FeatureCollection, JsonValue};

/// the feature a point query resolves to. server order is trusted as-is,
/// no distance sort against the query point is performed.
pub fn first_feature(collection: &FeatureCollection) -> Option<&Feature> {
    collection.features.first()
}

/// one `key: value` line per property, in the feature's own property order
pub fn popup_lines(feature: &Feature) -> Vec<String> {
    feature
        .properties
        .iter()
        .flat_map(|props| props.iter())
        .map(|(key, value)| format!("{key}: {}", property_display(value)))
        .collect()
}

/// strings are shown without quotes, everything else in its JSON text form
pub fn property_display(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature_with(props: JsonValue) -> Feature {
        let properties = props.as_object().cloned();
        Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties,
            foreign_members: None,
        }
    }

    #[test]
    fn test_first_feature_is_server_order() {
        let a = feature_with(json!({"id": "a"}));
        let b = feature_with(json!({"id": "b"}));
        let collection = FeatureCollection {
            bbox: None,
            features: vec![a.clone(), b],
            foreign_members: None,
        };
        assert_eq!(first_feature(&collection), Some(&a));
    }

    #[test]
    fn test_first_feature_empty() {
        let collection = FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        };
        assert!(first_feature(&collection).is_none());
    }

    #[test]
    fn test_popup_lines_keep_property_order() {
        let feature = feature_with(json!({
            "zeta": "last-alphabetically",
            "area": 12.5,
            "active": true,
            "owner": null
        }));
        assert_eq!(
            popup_lines(&feature),
            vec![
                "zeta: last-alphabetically",
                "area: 12.5",
                "active: true",
                "owner: null"
            ]
        );
    }

    #[test]
    fn test_popup_lines_without_properties() {
        let feature = feature_with(JsonValue::Null);
        assert!(popup_lines(&feature).is_empty());
    }
}
