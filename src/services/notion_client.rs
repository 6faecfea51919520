//! services/notion_client.rs
//! Cliente HTTP para la API REST de Notion.

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Response,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    config::sync_config::SyncConfig,
    error::{SyncError, SyncResult},
    models::notion_model::{DatabaseSchema, NotionErrorBody, QueryRequest, QueryResponse},
};

/// Las tres operaciones remotas que necesita el sincronizador.
#[async_trait]
pub trait NotionApi: Send + Sync {
    async fn retrieve_database(&self, database_id: &str) -> SyncResult<DatabaseSchema>;

    async fn query_database(
        &self,
        database_id: &str,
        query: &QueryRequest,
    ) -> SyncResult<QueryResponse>;

    async fn update_page(&self, page_id: &str, properties: &Map<String, Value>)
        -> SyncResult<()>;
}

#[derive(Clone)]
pub struct NotionClient {
    http_client: Client,
    api_base: String,
}

impl NotionClient {
    pub fn new(config: &SyncConfig) -> SyncResult<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| SyncError::Config("NOTION_API_KEY contiene caracteres inválidos".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            "notion-version",
            HeaderValue::from_str(&config.notion_version).map_err(|_| {
                SyncError::Config(format!("NOTION_VERSION inválida: {}", config.notion_version))
            })?,
        );

        // Sin timeout ni reintentos: una llamada lenta bloquea la corrida
        let http_client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http_client,
            api_base: config.api_base.clone(),
        })
    }

    fn url(&self, segments: &[&str]) -> String {
        let path: Vec<String> = segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect();
        format!("{}/{}", self.api_base, path.join("/"))
    }
}

#[async_trait]
impl NotionApi for NotionClient {
    async fn retrieve_database(&self, database_id: &str) -> SyncResult<DatabaseSchema> {
        let url = self.url(&["databases", database_id]);
        log::debug!("(retrieve_database) GET {}", url);

        let resp = self.http_client.get(&url).send().await?;
        read_json(resp).await
    }

    async fn query_database(
        &self,
        database_id: &str,
        query: &QueryRequest,
    ) -> SyncResult<QueryResponse> {
        let url = self.url(&["databases", database_id, "query"]);
        log::debug!(
            "(query_database) POST {} cursor={:?}",
            url,
            query.start_cursor
        );

        let resp = self.http_client.post(&url).json(query).send().await?;
        read_json(resp).await
    }

    async fn update_page(
        &self,
        page_id: &str,
        properties: &Map<String, Value>,
    ) -> SyncResult<()> {
        let url = self.url(&["pages", page_id]);
        let payload = serde_json::json!({ "properties": properties });

        let resp = self.http_client.patch(&url).json(&payload).send().await?;
        let _: Value = read_json(resp).await?;
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> SyncResult<T> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| SyncError::UnexpectedResponse(format!("{} (body='{}')", e, body)))
}

/// Sólo un cuerpo de error de Notion con `code` y `message` es un `Api`;
/// cualquier otra respuesta no exitosa queda como `HttpStatus`.
pub fn api_error(status: u16, body: &str) -> SyncError {
    match serde_json::from_str::<NotionErrorBody>(body) {
        Ok(err) if !err.code.is_empty() && !err.message.is_empty() => SyncError::Api {
            status,
            code: err.code,
            message: err.message,
        },
        _ => SyncError::HttpStatus {
            status,
            body: body.to_string(),
        },
    }
}
