//! tests/filter_tests.rs
//! Pruebas del filtro por columna de frecuencia.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::SyncError;
    use crate::services::filter_service::{build_frequency_filter, FrequencyFieldKind};

    fn values(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rich_text_two_values_is_or() {
        let filter =
            build_frequency_filter(FrequencyFieldKind::RichText, "Frecuencia", &values(&["A", "B"]))
                .unwrap();

        assert_eq!(
            filter,
            json!({
                "or": [
                    { "property": "Frecuencia", "rich_text": { "contains": "A" } },
                    { "property": "Frecuencia", "rich_text": { "contains": "B" } }
                ]
            })
        );
    }

    #[test]
    fn test_single_value_is_not_wrapped() {
        let filter =
            build_frequency_filter(FrequencyFieldKind::RichText, "Frecuencia", &values(&["A"]))
                .unwrap();

        assert_eq!(
            filter,
            json!({ "property": "Frecuencia", "rich_text": { "contains": "A" } })
        );
        assert!(filter.get("or").is_none());
    }

    #[test]
    fn test_select_uses_equals() {
        let filter =
            build_frequency_filter(FrequencyFieldKind::Select, "Frecuencia", &values(&["Diario"]))
                .unwrap();

        assert_eq!(
            filter,
            json!({ "property": "Frecuencia", "select": { "equals": "Diario" } })
        );
    }

    #[test]
    fn test_multi_select_shape() {
        let filter = build_frequency_filter(
            FrequencyFieldKind::MultiSelect,
            "Frecuencia",
            &values(&["Lunes", "Viernes"]),
        )
        .unwrap();

        assert_eq!(
            filter,
            json!({
                "or": [
                    { "property": "Frecuencia", "multi_select": { "contains": "Lunes" } },
                    { "property": "Frecuencia", "multi_select": { "contains": "Viernes" } }
                ]
            })
        );
    }

    #[test]
    fn test_kind_from_schema_type() {
        assert_eq!(
            FrequencyFieldKind::from_type("rich_text").unwrap(),
            FrequencyFieldKind::RichText
        );
        assert_eq!(
            FrequencyFieldKind::from_type("select").unwrap(),
            FrequencyFieldKind::Select
        );
        assert_eq!(
            FrequencyFieldKind::from_type("multi_select").unwrap(),
            FrequencyFieldKind::MultiSelect
        );
    }

    #[test]
    fn test_unsupported_type_names_type_and_supported_set() {
        let err = FrequencyFieldKind::from_type("number").unwrap_err();
        assert!(matches!(err, SyncError::Config(_)));

        let msg = err.to_string();
        assert!(msg.contains("number"), "{}", msg);
        assert!(msg.contains("rich_text, select, multi_select"), "{}", msg);
    }

    #[test]
    fn test_no_values_is_config_error() {
        let err = build_frequency_filter(FrequencyFieldKind::Select, "Frecuencia", &[]).unwrap_err();
        assert!(matches!(err, SyncError::Config(_)));
    }
}
