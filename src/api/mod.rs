//! Lojas Backend API
//!
//! Request shapes, response shapes and the [`StoreBackend`] capability the
//! controller issues requests through.
//!
//! ## Endpoints
//!
//! - `POST /lojas`: register a store
//! - `GET /lojas`: list stores
//! - `POST /produtos_lojas`: associate a product with a store
//! - `GET /dashboard/{id}`: one store's profile, stock and recent sales
//! - `GET /historico`: sales history, optionally filtered by store
//! - `POST /vendas`: record a sale
//! - `GET /produtos`: product catalog
//! - `GET /status`: backend health

mod client;
pub mod dto;
mod error;

pub use client::LojasClient;
pub use dto::{
    ActionReply, AssociationForm, Dashboard, History, HistoryEntry, Product, ProductList, Sale,
    SaleForm, ServiceStatus, StockItem, Store, StoreForm, StoreList,
};
pub use error::{TransportError, ViewError, ViewResult};

use async_trait::async_trait;

/// Request-issuing capability used by the controller
///
/// Implementations return the decoded JSON body whatever the HTTP status;
/// only failures to obtain a JSON body are errors.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// `POST /lojas`
    async fn create_store(&self, form: &StoreForm) -> Result<ActionReply, TransportError>;

    /// `POST /produtos_lojas`
    async fn associate_product(&self, form: &AssociationForm)
        -> Result<ActionReply, TransportError>;

    /// `POST /vendas`
    async fn record_sale(&self, form: &SaleForm) -> Result<ActionReply, TransportError>;

    /// `GET /lojas`
    async fn list_stores(&self) -> Result<StoreList, TransportError>;

    /// `GET /dashboard/{loja_id}`
    async fn dashboard(&self, loja_id: &str) -> Result<Dashboard, TransportError>;

    /// `GET /historico`, optionally `?loja_id=`
    async fn history(&self, loja_id: Option<&str>) -> Result<History, TransportError>;

    /// `GET /produtos`
    async fn list_products(&self) -> Result<ProductList, TransportError>;

    /// `GET /status`
    async fn status(&self) -> Result<ServiceStatus, TransportError>;
}
