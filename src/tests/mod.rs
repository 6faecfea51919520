//! tests/mod.rs
//! Pruebas unitarias del sincronizador.

mod filter_tests;
mod schema_tests;
