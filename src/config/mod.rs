//! config/mod.rs
//! Configuración global de la aplicación.

pub mod sync_config;
