//! REST record service.
//!
//! Speaks the json-server style contract exposed by `cadastros-api`:
//!
//! ```text
//! GET    /<resource>?_page=&_limit=&<titleField>_like=   list, total in x-total-count
//! GET    /<resource>/{id}                                get
//! POST   /<resource>                                     create, returns the record
//! PUT    /<resource>/{id}                                full replacement
//! DELETE /<resource>/{id}                                delete
//! ```

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use cadastros_core::record::Entity;
use cadastros_core::service::{ListQuery, Page, RecordService, RequestError};
use cadastros_core::types::DbId;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Response header carrying the number of records matching a listing.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

const LIST_FAILED: &str = "Erro ao consultar os registros.";
const GET_FAILED: &str = "Erro ao consultar o registro.";
const CREATE_FAILED: &str = "Erro ao criar o registro.";
const UPDATE_FAILED: &str = "Erro ao atualizar o registro.";
const DELETE_FAILED: &str = "Erro ao apagar o registro.";

/// HTTP client for one record kind.
pub struct HttpRecordService<E> {
    client: reqwest::Client,
    resource_url: String,
    page_size: u32,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> HttpRecordService<E> {
    /// Build a client with its own connection pool and the configured
    /// request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing [`reqwest::Client`], e.g. one shared between the
    /// city and person services.
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            resource_url: config.resource_url(E::RESOURCE),
            page_size: config.page_size,
            _entity: PhantomData,
        }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn record_url(&self, id: DbId) -> String {
        format!("{}/{id}", self.resource_url)
    }

    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<E>, ClientError> {
        let mut params = vec![
            ("_page".to_string(), query.page.max(1).to_string()),
            ("_limit".to_string(), self.page_size.to_string()),
        ];
        if !query.filter.is_empty() {
            params.push((format!("{}_like", E::TITLE_FIELD), query.filter.clone()));
        }

        let response = self
            .client
            .get(&self.resource_url)
            .query(&params)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let total_header = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        let items: Vec<E> = response.json().await?;
        let total_count = total_header.unwrap_or(items.len() as u64);

        Ok(Page { items, total_count })
    }

    async fn fetch_one(&self, id: DbId) -> Result<E, ClientError> {
        let response = self.client.get(self.record_url(id)).send().await?;
        parse_response(response).await
    }

    async fn post(&self, draft: &E::Draft) -> Result<E, ClientError> {
        let response = self
            .client
            .post(&self.resource_url)
            .json(draft)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn put(&self, id: DbId, record: &E) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(record)
            .send()
            .await?;
        check_status(response).await
    }

    async fn remove(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        check_status(response).await
    }
}

#[async_trait]
impl<E: Entity> RecordService<E> for HttpRecordService<E> {
    async fn get_by_id(&self, id: DbId) -> Result<E, RequestError> {
        self.fetch_one(id)
            .await
            .map_err(|err| err.into_request_error(GET_FAILED))
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<E>, RequestError> {
        self.fetch_page(query)
            .await
            .map_err(|err| err.into_request_error(LIST_FAILED))
    }

    async fn create(&self, draft: &E::Draft) -> Result<DbId, RequestError> {
        let record = self
            .post(draft)
            .await
            .map_err(|err| err.into_request_error(CREATE_FAILED))?;
        tracing::debug!(entity = E::NAME, id = record.id(), "Record created over HTTP");
        Ok(record.id())
    }

    async fn update_by_id(&self, id: DbId, record: &E) -> Result<(), RequestError> {
        self.put(id, record)
            .await
            .map_err(|err| err.into_request_error(UPDATE_FAILED))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), RequestError> {
        self.remove(id)
            .await
            .map_err(|err| err.into_request_error(DELETE_FAILED))
    }
}

// ---- response helpers ----

/// Return the response unchanged on a success status, otherwise a
/// [`ClientError::Api`] with the status and body text.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ClientError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}

async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
    ensure_success(response).await?;
    Ok(())
}
