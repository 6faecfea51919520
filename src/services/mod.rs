//! services/mod.rs
//! Módulo que agrupa las capas de negocio del sincronizador.

pub mod filter_service;
pub mod notion_client;
pub mod schema_service;
pub mod task_sync_service;
