//! services/filter_service.rs
//! Construcción del filtro de Notion para la columna de frecuencia.

use serde_json::{json, Value};

use crate::error::{SyncError, SyncResult};

/// Tipos de columna soportados para la frecuencia, cada uno con su operador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyFieldKind {
    RichText,
    Select,
    MultiSelect,
}

impl FrequencyFieldKind {
    pub const SUPPORTED: [FrequencyFieldKind; 3] = [
        FrequencyFieldKind::RichText,
        FrequencyFieldKind::Select,
        FrequencyFieldKind::MultiSelect,
    ];

    pub fn from_type(kind: &str) -> SyncResult<Self> {
        Self::SUPPORTED
            .into_iter()
            .find(|k| k.type_key() == kind)
            .ok_or_else(|| {
                let supported: Vec<&str> = Self::SUPPORTED.iter().map(|k| k.type_key()).collect();
                SyncError::Config(format!(
                    "Tipo de columna de frecuencia no soportado: {} (tipos soportados: {})",
                    kind,
                    supported.join(", ")
                ))
            })
    }

    /// Clave del tipo en el esquema y en el filtro
    pub fn type_key(self) -> &'static str {
        match self {
            FrequencyFieldKind::RichText => "rich_text",
            FrequencyFieldKind::Select => "select",
            FrequencyFieldKind::MultiSelect => "multi_select",
        }
    }

    pub fn operator(self) -> &'static str {
        match self {
            FrequencyFieldKind::RichText => "contains",
            FrequencyFieldKind::Select => "equals",
            FrequencyFieldKind::MultiSelect => "contains",
        }
    }

    /// `{"property": <name>, <type>: {<operator>: <value>}}`
    pub fn condition(self, property: &str, value: &str) -> Value {
        let mut clause = serde_json::Map::new();
        clause.insert(self.operator().to_string(), json!(value));

        let mut condition = serde_json::Map::new();
        condition.insert("property".to_string(), json!(property));
        condition.insert(self.type_key().to_string(), Value::Object(clause));
        Value::Object(condition)
    }
}

/// Un valor -> condición directa; varios -> `{"or": [...]}`.
pub fn build_frequency_filter(
    kind: FrequencyFieldKind,
    property: &str,
    values: &[String],
) -> SyncResult<Value> {
    let mut conditions: Vec<Value> = values
        .iter()
        .map(|value| kind.condition(property, value))
        .collect();

    match conditions.len() {
        0 => Err(SyncError::Config(
            "FREQUENCY_STATUS no tiene valores para filtrar".to_string(),
        )),
        1 => Ok(conditions.remove(0)),
        _ => Ok(json!({ "or": conditions })),
    }
}
