//! # lojas-view
//!
//! Presentation layer for the lojas store-management backend: submits forms,
//! receives JSON and renders HTML fragments into page regions (store list,
//! dashboard, sales history).
//!
//! ## Modules
//!
//! - [`api`]: backend request/response shapes and the reqwest client
//! - [`controller`]: the view-sync controller and its banner timers
//! - [`render`]: maud templates and value formatting
//! - [`surface`]: the render target abstraction and an in-memory page
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lojas_view::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let backend = Arc::new(LojasClient::new(config.backend.clone())?);
//!     let page = Arc::new(MemorySurface::new());
//!
//!     let controller = ViewSyncController::new(backend, page.clone(), config.banner);
//!     controller.initial_load().await?;
//!
//!     println!("{}", page.html(Region::StoreList));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod render;
pub mod surface;

pub use api::{
    ActionReply, AssociationForm, Dashboard, History, HistoryEntry, LojasClient, Product,
    SaleForm, ServiceStatus, StockItem, Store, StoreBackend, StoreForm, TransportError,
    ViewError, ViewResult,
};

pub use config::{BackendConfig, BannerConfig, Config, ConfigError, LoggingConfig};

pub use controller::{BannerScheduler, ViewSyncController};

pub use surface::{
    ControlState, FormId, MemorySurface, PageState, Region, RegionState, RenderSink, StatusKind,
};
