//! services/task_sync_service.rs
//! Flujo principal: filtrar por frecuencia, paginar y actualizar cada registro.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::{
    config::sync_config::SyncConfig,
    error::{SyncError, SyncResult},
    models::notion_model::{NotionPage, QueryRequest, RunSummary, UpdatePayload},
    services::{
        filter_service::{build_frequency_filter, FrequencyFieldKind},
        notion_client::NotionApi,
        schema_service::SchemaService,
    },
};

/// Máximo permitido por Notion en una consulta
pub const PAGE_SIZE: u32 = 100;
pub const UNTITLED: &str = "untitled";
const TIMESTAMP_TIME_ZONE: &str = "Etc/GMT";

pub struct TaskSyncService {
    api: Arc<dyn NotionApi>,
    schema: SchemaService,
    config: SyncConfig,
}

impl TaskSyncService {
    pub fn new(api: Arc<dyn NotionApi>, config: SyncConfig) -> Self {
        let schema = SchemaService::new(api.clone(), config.database_id.clone());
        Self {
            api,
            schema,
            config,
        }
    }

    /// Ejecuta una corrida completa. Un fallo al actualizar un registro se
    /// registra y se sigue; cualquier otro error aborta la corrida.
    pub async fn batch_process_tasks(&self) -> SyncResult<RunSummary> {
        match self.run().await {
            Ok(summary) => {
                log::info!(
                    "Proceso completado | total: {} | éxito: {} | fallos: {}",
                    summary.total,
                    summary.succeeded,
                    summary.failed()
                );
                Ok(summary)
            }
            Err(e) => {
                log::error!("(batch_process_tasks) Proceso interrumpido: {:?}", e);
                Err(e)
            }
        }
    }

    async fn run(&self) -> SyncResult<RunSummary> {
        let mut query = QueryRequest {
            filter: self.build_frequency_filter().await?,
            page_size: PAGE_SIZE,
            start_cursor: None,
        };
        let mut summary = RunSummary::default();

        loop {
            let response = self
                .api
                .query_database(&self.config.database_id, &query)
                .await?;
            summary.total += response.results.len();
            log::info!(
                "(run) Página recibida con {} registros (has_more={})",
                response.results.len(),
                response.has_more
            );

            for page in &response.results {
                let update = self.prepare_update_data(page).await?;
                match self.api.update_page(&update.page_id, &update.properties).await {
                    Ok(()) => {
                        summary.succeeded += 1;
                        log::info!("Actualizado con éxito: {}", update.title);
                    }
                    Err(e) if e.is_recoverable() => {
                        log::error!("Fallo al actualizar {}: {}", update.url, e);
                    }
                    Err(e) => return Err(e),
                }
            }

            if !response.has_more {
                break;
            }
            match response.next_cursor {
                Some(cursor) => query.start_cursor = Some(cursor),
                None => {
                    return Err(SyncError::UnexpectedResponse(
                        "has_more=true sin next_cursor".to_string(),
                    ))
                }
            }
        }

        Ok(summary)
    }

    /// Filtro según el tipo declarado de la columna de frecuencia.
    pub async fn build_frequency_filter(&self) -> SyncResult<Value> {
        let name = self.config.frequency_name.as_deref().ok_or_else(|| {
            SyncError::Config("FREQUENCY_NAME no está configurado".to_string())
        })?;
        let kind = FrequencyFieldKind::from_type(self.schema.field_type(name).await?)?;
        log::info!(
            "(build_frequency_filter) Columna '{}' de tipo '{}', valores={:?}",
            name,
            kind.type_key(),
            self.config.frequency_values
        );
        build_frequency_filter(kind, name, &self.config.frequency_values)
    }

    pub async fn prepare_update_data(&self, page: &NotionPage) -> SyncResult<UpdatePayload> {
        let mut properties = Map::new();
        for column in &self.config.status_columns {
            let status_id = self
                .schema
                .status_option_id(column, &self.config.target_status)
                .await?;
            properties.insert(column.clone(), json!({ "status": { "id": status_id } }));
        }

        if let Some(time_column) = &self.config.time_column {
            properties.insert(time_column.clone(), json!({ "date": current_timestamp() }));
        }

        Ok(UpdatePayload {
            page_id: page.id.clone(),
            properties,
            title: page_title(page, &self.config.title_column),
            url: page.url.clone(),
        })
    }
}

/// Instante actual en UTC, ISO-8601, con zona horaria fija.
pub fn current_timestamp() -> Value {
    json!({
        "start": Utc::now().to_rfc3339(),
        "time_zone": TIMESTAMP_TIME_ZONE,
    })
}

/// `properties[<title_column>].title[0].plain_text`, o "untitled".
pub fn page_title(page: &NotionPage, title_column: &str) -> String {
    page.properties
        .get(title_column)
        .and_then(|prop| prop.get("title"))
        .and_then(|title| title.get(0))
        .and_then(|first| first.get("plain_text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}
