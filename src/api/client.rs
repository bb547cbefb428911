//! Lojas REST API Client
//!
//! HTTP client for the lojas backend. Non-2xx replies are still decoded as
//! JSON, since the backend reports failures as `{error}` bodies with a 500.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::dto::{
    ActionReply, AssociationForm, Dashboard, History, ProductList, SaleForm, ServiceStatus,
    StoreForm, StoreList,
};
use super::error::TransportError;
use super::StoreBackend;
use crate::config::BackendConfig;

/// reqwest-backed [`StoreBackend`]
pub struct LojasClient {
    client: Client,
    config: BackendConfig,
}

impl LojasClient {
    /// Create a new client with the given configuration
    pub fn new(config: BackendConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, TransportError> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request, "GET", path).await
    }

    async fn post_form<F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
    ) -> Result<ActionReply, TransportError> {
        let request = self.client.post(self.url(path)).form(form);
        self.send(request, "POST", path).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<T, TransportError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(request_id = %request_id, method, path, "Sending backend request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(request_id = %request_id, method, path, error = %e, "Backend request failed");
            TransportError::from_reqwest(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(TransportError::from_reqwest)?;

        tracing::debug!(
            request_id = %request_id,
            status = status.as_u16(),
            bytes = body.len(),
            "Backend response received"
        );

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(request_id = %request_id, status = status.as_u16(), error = %e, "Backend response is not JSON");
            TransportError::Decode(e)
        })
    }
}

#[async_trait]
impl StoreBackend for LojasClient {
    async fn create_store(&self, form: &StoreForm) -> Result<ActionReply, TransportError> {
        self.post_form("/lojas", form).await
    }

    async fn associate_product(
        &self,
        form: &AssociationForm,
    ) -> Result<ActionReply, TransportError> {
        self.post_form("/produtos_lojas", form).await
    }

    async fn record_sale(&self, form: &SaleForm) -> Result<ActionReply, TransportError> {
        self.post_form("/vendas", form).await
    }

    async fn list_stores(&self) -> Result<StoreList, TransportError> {
        self.get_json("/lojas", &[]).await
    }

    async fn dashboard(&self, loja_id: &str) -> Result<Dashboard, TransportError> {
        let path = format!("/dashboard/{}", urlencoding::encode(loja_id.trim()));
        self.get_json(&path, &[]).await
    }

    async fn history(&self, loja_id: Option<&str>) -> Result<History, TransportError> {
        match loja_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => self.get_json("/historico", &[("loja_id", id)]).await,
            None => self.get_json("/historico", &[]).await,
        }
    }

    async fn list_products(&self) -> Result<ProductList, TransportError> {
        self.get_json("/produtos", &[]).await
    }

    async fn status(&self) -> Result<ServiceStatus, TransportError> {
        self.get_json("/status", &[]).await
    }
}
