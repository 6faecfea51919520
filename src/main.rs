use std::sync::Arc;

use anyhow::{Context, Result};
use dotenv::dotenv;

use crate::config::sync_config::SyncConfig;
use crate::logger::init_logger;
use crate::services::notion_client::NotionClient;
use crate::services::task_sync_service::TaskSyncService;

mod config;
mod error;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

async fn run() -> Result<()> {
    // La config se valida antes de cualquier llamada de red
    let config = SyncConfig::from_env().context("No se pudo cargar la configuración")?;

    log::info!(
        "Sincronizando base de datos {} -> status '{}' en {:?}",
        config.database_id,
        config.target_status,
        config.status_columns
    );

    let client = NotionClient::new(&config).context("No se pudo crear el cliente de Notion")?;
    let sync_service = TaskSyncService::new(Arc::new(client), config);

    sync_service
        .batch_process_tasks()
        .await
        .context("Fallo en la sincronización de tareas")?;

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    if let Err(e) = run().await {
        log::error!("Programa terminado: {:?}", e);
        std::process::exit(1);
    }
}
