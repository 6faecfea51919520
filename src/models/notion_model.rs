//! models/notion_model.rs
//! Estructuras de datos para requests/responses de la API de Notion.
//! Sólo se modelan los campos que usa el sincronizador.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Respuesta de `GET /databases/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSchema {
    pub properties: HashMap<String, PropertySchema>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertySchema {
    /// "rich_text", "select", "multi_select", "status", "date", ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Sólo presente en columnas de tipo "status"
    pub status: Option<StatusConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    #[serde(default)]
    pub options: Vec<StatusOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusOption {
    pub id: String,
    pub name: String,
}

/// Body de `POST /databases/{id}/query`
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub filter: Value,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<NotionPage>,
    #[serde(default)]
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// Un registro (fila) de la base de datos
#[derive(Debug, Clone, Deserialize)]
pub struct NotionPage {
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Lo que se envía en `PATCH /pages/{id}`, más datos para logs
#[derive(Debug, Clone)]
pub struct UpdatePayload {
    pub page_id: String,
    pub properties: Map<String, Value>,
    pub title: String,
    pub url: String,
}

/// Cuerpo de error estándar de Notion
#[derive(Debug, Clone, Deserialize)]
pub struct NotionErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Contadores de una corrida
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}
