//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod notion_model;
