//! config/sync_config.rs
//! Configuración del sincronizador, leída desde variables de entorno
//! (el .env se carga en main antes de llegar aquí).

use crate::error::{SyncError, SyncResult};

pub const DEFAULT_API_BASE: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
/// Propiedad de tipo "title" de la que se saca el nombre del registro
pub const DEFAULT_TITLE_COLUMN: &str = "Name";

/// Variables obligatorias, en el orden en que se reportan si faltan
pub const REQUIRED_KEYS: [&str; 5] = [
    "NOTION_API_KEY",
    "NOTION_DATABASE_ID",
    "FREQUENCY_STATUS",
    "STATUS_COLUMNS",
    "TARGET_STATUS",
];

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub api_key: String,
    pub database_id: String,
    pub frequency_values: Vec<String>,
    pub status_columns: Vec<String>,
    pub target_status: String,
    pub frequency_name: Option<String>,
    pub time_column: Option<String>,
    pub title_column: String,
    pub api_base: String,
    pub notion_version: String,
}

impl SyncConfig {
    pub fn from_env() -> SyncResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construye la config a partir de cualquier fuente clave -> valor.
    /// Reporta todas las claves obligatorias ausentes de una sola vez.
    pub fn from_lookup<F>(lookup: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let scalar = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = scalar("NOTION_API_KEY");
        let database_id = scalar("NOTION_DATABASE_ID");
        let frequency_values = parse_list(lookup("FREQUENCY_STATUS").as_deref());
        let status_columns = parse_list(lookup("STATUS_COLUMNS").as_deref());
        let target_status = scalar("TARGET_STATUS");

        let present = [
            api_key.is_some(),
            database_id.is_some(),
            !frequency_values.is_empty(),
            !status_columns.is_empty(),
            target_status.is_some(),
        ];
        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .zip(present)
            .filter(|(_, ok)| !ok)
            .map(|(key, _)| key.to_string())
            .collect();

        match (api_key, database_id, target_status) {
            (Some(api_key), Some(database_id), Some(target_status)) if missing.is_empty() => {
                Ok(SyncConfig {
                    api_key,
                    database_id,
                    frequency_values,
                    status_columns,
                    target_status,
                    frequency_name: scalar("FREQUENCY_NAME"),
                    time_column: scalar("TIME_COLUMN"),
                    title_column: scalar("TITLE_COLUMN")
                        .unwrap_or_else(|| DEFAULT_TITLE_COLUMN.to_string()),
                    api_base: scalar("NOTION_API_BASE")
                        .map(|base| base.trim_end_matches('/').to_string())
                        .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                    notion_version: scalar("NOTION_VERSION")
                        .unwrap_or_else(|| DEFAULT_NOTION_VERSION.to_string()),
                })
            }
            _ => Err(SyncError::MissingConfig(missing)),
        }
    }
}

/// "a, b,,c " -> ["a", "b", "c"]
pub fn parse_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}
