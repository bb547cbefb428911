//! View-Sync Controller
//!
//! Turns page events into backend requests and renders the replies.
//!
//! ## Flow
//!
//! 1. A form submit disables its control and issues one request
//! 2. The reply is rendered into the form's region, or announced as a
//!    transient banner
//! 3. The control is restored whatever happened, then dependent regions are
//!    refreshed
//!
//! Requests are never retried. Overlapping requests to one region are not
//! ordered: the last reply to resolve is what the region shows.

mod banner;
mod busy;

pub use banner::BannerScheduler;

use maud::Markup;
use std::sync::Arc;

use crate::api::{
    ActionReply, AssociationForm, SaleForm, ServiceStatus, StoreBackend, StoreForm,
    TransportError, ViewError, ViewResult,
};
use crate::config::BannerConfig;
use crate::render::views;
use crate::surface::{FormId, Region, RenderSink, StatusKind};
use busy::BusyGuard;

const REGISTER_FALLBACK: &str = "Erro ao cadastrar loja";
const ASSOCIATE_FALLBACK: &str = "Erro ao associar produto";
const SALE_FALLBACK: &str = "Erro ao registrar venda";

/// Page controller with its backend and render target injected
///
/// Cheap to clone; clones share the same backend, sink and banner timers.
#[derive(Clone)]
pub struct ViewSyncController {
    inner: Arc<Inner>,
}

struct Inner {
    backend: Arc<dyn StoreBackend>,
    sink: Arc<dyn RenderSink>,
    banners: BannerScheduler,
}

impl ViewSyncController {
    pub fn new(
        backend: Arc<dyn StoreBackend>,
        sink: Arc<dyn RenderSink>,
        banner: BannerConfig,
    ) -> Self {
        let banners = BannerScheduler::new(Arc::clone(&sink), banner);
        Self {
            inner: Arc::new(Inner {
                backend,
                sink,
                banners,
            }),
        }
    }

    fn backend(&self) -> &dyn StoreBackend {
        self.inner.backend.as_ref()
    }

    fn sink(&self) -> &dyn RenderSink {
        self.inner.sink.as_ref()
    }

    /// Banner timers, exposed for inspection
    pub fn banners(&self) -> &BannerScheduler {
        &self.inner.banners
    }

    /// Page-ready: fetch the store list and the history concurrently
    ///
    /// Both regions are always rendered. The store list's error is returned
    /// when both fail.
    pub async fn initial_load(&self) -> ViewResult<()> {
        let (stores, history) = tokio::join!(self.list_stores(), self.refresh_history(None));
        tracing::debug!(
            stores_ok = stores.is_ok(),
            history_ok = history.is_ok(),
            "Initial load finished"
        );
        stores?;
        history?;
        Ok(())
    }

    /// Submit the store registration form
    ///
    /// On success the form is reset and the store list is reloaded. Returns
    /// the backend's message.
    pub async fn register_store(&self, form: StoreForm) -> ViewResult<String> {
        let outcome = {
            let _busy = BusyGuard::engage(self.sink(), FormId::RegisterStore);
            let reply = self.backend().create_store(&form).await;
            let outcome = self.settle(Region::StoreList, reply, REGISTER_FALLBACK);
            if outcome.is_ok() {
                self.sink().reset_form(FormId::RegisterStore);
            }
            outcome
        };

        if outcome.is_ok() {
            // Rendered in place; the registration outcome stands on its own
            let _ = self.list_stores().await;
        }
        outcome
    }

    /// Submit the product association form
    ///
    /// The store list is not refreshed: associations do not show there.
    pub async fn associate_product(&self, form: AssociationForm) -> ViewResult<String> {
        let _busy = BusyGuard::engage(self.sink(), FormId::AssociateProduct);
        let reply = self.backend().associate_product(&form).await;
        let outcome = self.settle(Region::AssociationMessage, reply, ASSOCIATE_FALLBACK);
        if outcome.is_ok() {
            self.sink().reset_form(FormId::AssociateProduct);
        }
        outcome
    }

    /// Submit the sale form; on success the history is reloaded
    pub async fn record_sale(&self, form: SaleForm) -> ViewResult<String> {
        let outcome = {
            let _busy = BusyGuard::engage(self.sink(), FormId::RecordSale);
            let reply = self.backend().record_sale(&form).await;
            let outcome = self.settle(Region::SaleMessage, reply, SALE_FALLBACK);
            if outcome.is_ok() {
                self.sink().reset_form(FormId::RecordSale);
            }
            outcome
        };

        if outcome.is_ok() {
            let _ = self.refresh_history(None).await;
        }
        outcome
    }

    /// Submit the dashboard form
    ///
    /// Returns whether the store exists. A missing store is rendered as
    /// not-found and is not an error.
    pub async fn load_dashboard(&self, loja_id: &str) -> ViewResult<bool> {
        let _busy = BusyGuard::engage(self.sink(), FormId::Dashboard);
        self.render(Region::Dashboard, views::loading());

        match self.backend().dashboard(loja_id).await {
            Ok(data) => {
                self.render(Region::Dashboard, views::dashboard(&data));
                Ok(data.loja.is_some())
            }
            Err(e) => Err(self.render_failure(Region::Dashboard, "dashboard", e)),
        }
    }

    /// Reload the store list; returns the number of stores shown
    pub async fn list_stores(&self) -> ViewResult<usize> {
        self.render(Region::StoreList, views::loading());

        match self.backend().list_stores().await {
            Ok(data) => {
                self.render(Region::StoreList, views::store_list(&data.lojas));
                Ok(data.lojas.len())
            }
            Err(e) => Err(self.render_failure(Region::StoreList, "lojas", e)),
        }
    }

    /// Reload the sales history, optionally for one store only
    pub async fn refresh_history(&self, loja_id: Option<&str>) -> ViewResult<usize> {
        self.render(Region::History, views::loading());

        match self.backend().history(loja_id).await {
            Ok(data) => {
                self.render(Region::History, views::history(&data));
                Ok(data.historico.len())
            }
            Err(e) => Err(self.render_failure(Region::History, "histórico", e)),
        }
    }

    /// Reload the product catalog
    pub async fn list_products(&self) -> ViewResult<usize> {
        self.render(Region::ProductList, views::loading());

        match self.backend().list_products().await {
            Ok(data) => {
                self.render(Region::ProductList, views::product_list(&data.produtos));
                Ok(data.produtos.len())
            }
            Err(e) => Err(self.render_failure(Region::ProductList, "produtos", e)),
        }
    }

    /// Backend health; nothing is rendered
    pub async fn check_status(&self) -> ViewResult<ServiceStatus> {
        Ok(self.backend().status().await?)
    }

    fn render(&self, region: Region, markup: Markup) {
        self.inner.banners.cancel(region);
        self.sink().set_html(region, markup.into_string());
    }

    fn render_failure(&self, region: Region, what: &str, error: TransportError) -> ViewError {
        tracing::warn!(region = region.dom_id(), error = %error, "Failed to load region");
        self.render(region, views::load_error(what, &error));
        error.into()
    }

    /// Resolve a form reply and announce it as a banner in `region`
    fn settle(
        &self,
        region: Region,
        reply: Result<ActionReply, TransportError>,
        fallback: &str,
    ) -> ViewResult<String> {
        let outcome = reply
            .map_err(ViewError::from)
            .and_then(|reply| reply.into_outcome(fallback));

        let banners = &self.inner.banners;
        match &outcome {
            Ok(message) => {
                tracing::debug!(region = region.dom_id(), %message, "Form accepted");
                banners.show(region, &format!("✅ {}", message), StatusKind::Success);
            }
            Err(ViewError::Server(error)) => {
                tracing::warn!(region = region.dom_id(), %error, "Form rejected by backend");
                banners.show(region, &format!("❌ {}", error), StatusKind::Error);
            }
            Err(ViewError::Transport(error)) => {
                tracing::warn!(region = region.dom_id(), %error, "Form request failed");
                banners.show(
                    region,
                    &format!("❌ Erro de conexão: {}", error),
                    StatusKind::Error,
                );
            }
        }
        outcome
    }
}
