//! tests/schema_tests.rs
//! Pruebas de la cache de esquema y de ids de status.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::error::SyncError;
    use crate::services::schema_service::SchemaService;
    use crate::tests::fake_notion::FakeNotion;

    #[tokio::test]
    async fn test_status_id_is_cached_per_column() {
        let fake = Arc::new(FakeNotion::new("select", vec![]));
        let schema = SchemaService::new(fake.clone(), "db-1");

        assert_eq!(schema.cached_status_id("Estado"), None);

        let first = schema.status_option_id("Estado", "Por hacer").await.unwrap();
        assert_eq!(first, "opt-todo");
        assert_eq!(schema.cached_status_id("Estado").as_deref(), Some("opt-todo"));
        assert_eq!(schema.cached_status_id("Revisión"), None);

        let second = schema.status_option_id("Estado", "Por hacer").await.unwrap();
        assert_eq!(second, first);
        assert_eq!(fake.schema_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_resolution_is_not_cached() {
        let fake = Arc::new(FakeNotion::new("select", vec![]));
        let schema = SchemaService::new(fake.clone(), "db-1");

        let err = schema.status_option_id("Estado", "Archivado").await.unwrap_err();

        assert!(matches!(err, SyncError::Config(_)));
        assert_eq!(schema.cached_status_id("Estado"), None);
    }

    #[tokio::test]
    async fn test_field_type_lookup() {
        let fake = Arc::new(FakeNotion::new("multi_select", vec![]));
        let schema = SchemaService::new(fake.clone(), "db-1");

        assert_eq!(schema.field_type("Frecuencia").await.unwrap(), "multi_select");
        assert_eq!(schema.field_type("Estado").await.unwrap(), "status");
        assert!(matches!(
            schema.field_type("Inexistente").await,
            Err(SyncError::Config(_))
        ));
        assert_eq!(fake.schema_calls(), 1);
    }
}
