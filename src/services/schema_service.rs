//! services/schema_service.rs
//! Esquema de la base de datos, pedido una sola vez por proceso.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::OnceCell;

use crate::{
    error::{SyncError, SyncResult},
    models::notion_model::{DatabaseSchema, PropertySchema},
    services::notion_client::NotionApi,
};

/// Cache del esquema y de los ids de status. No hay invalidación: para ver
/// cambios de esquema hay que reiniciar el proceso.
pub struct SchemaService {
    api: Arc<dyn NotionApi>,
    database_id: String,
    schema: OnceCell<DatabaseSchema>,
    // columna -> id de la opción del status objetivo
    status_ids: Mutex<HashMap<String, String>>,
}

impl SchemaService {
    pub fn new(api: Arc<dyn NotionApi>, database_id: impl Into<String>) -> Self {
        Self {
            api,
            database_id: database_id.into(),
            schema: OnceCell::new(),
            status_ids: Mutex::new(HashMap::new()),
        }
    }

    /// Devuelve el esquema; la primera llamada lo trae de Notion.
    pub async fn schema(&self) -> SyncResult<&DatabaseSchema> {
        self.schema
            .get_or_try_init(|| async {
                log::info!(
                    "(schema) Obteniendo esquema de la base de datos {}...",
                    self.database_id
                );
                self.api
                    .retrieve_database(&self.database_id)
                    .await
                    .map_err(|e| {
                        log::error!("(schema) Fallo al obtener el esquema: {}", e);
                        e
                    })
            })
            .await
    }

    pub async fn property(&self, name: &str) -> SyncResult<&PropertySchema> {
        self.schema().await?.properties.get(name).ok_or_else(|| {
            SyncError::Config(format!(
                "La propiedad '{}' no existe en la base de datos",
                name
            ))
        })
    }

    /// Tipo declarado de una columna ("select", "status", ...)
    pub async fn field_type(&self, name: &str) -> SyncResult<&str> {
        Ok(self.property(name).await?.kind.as_str())
    }

    /// Resuelve el nombre legible del status objetivo a su id interno.
    pub async fn status_option_id(&self, column: &str, target: &str) -> SyncResult<String> {
        if let Some(id) = self.cached_status_id(column) {
            return Ok(id);
        }

        let prop = self.property(column).await?;
        let options = prop.status.as_ref().map(|s| &s.options).ok_or_else(|| {
            SyncError::Config(format!(
                "La columna '{}' es de tipo '{}', se esperaba 'status'",
                column, prop.kind
            ))
        })?;

        let id = options
            .iter()
            .find(|opt| opt.name == target)
            .map(|opt| opt.id.clone())
            .ok_or_else(|| {
                SyncError::Config(format!(
                    "No se encontró el status '{}' en la columna '{}'",
                    target, column
                ))
            })?;

        if let Ok(mut cache) = self.status_ids.lock() {
            cache.insert(column.to_string(), id.clone());
        }
        Ok(id)
    }

    pub(crate) fn cached_status_id(&self, column: &str) -> Option<String> {
        self.status_ids
            .lock()
            .ok()
            .and_then(|cache| cache.get(column).cloned())
    }
}
