//! error.rs
//! Errores del sincronizador. Sólo `Api` se considera recuperable
//! cuando ocurre al actualizar un registro individual.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Variables de entorno requeridas ausentes (se listan todas)
    #[error("Faltan variables de entorno requeridas: {}", .0.join(", "))]
    MissingConfig(Vec<String>),

    #[error("Configuración inválida: {0}")]
    Config(String),

    /// Notion respondió con un status no exitoso
    #[error("Notion API respondió {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Status no exitoso sin cuerpo de error de Notion (proxy, gateway, ...)
    #[error("HTTP {status} sin cuerpo de error de Notion: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Error de transporte HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Respuesta inesperada de Notion: {0}")]
    UnexpectedResponse(String),
}

impl SyncError {
    /// Un rechazo remoto al escribir un registro no aborta la corrida.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SyncError::Api { .. })
    }
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;
