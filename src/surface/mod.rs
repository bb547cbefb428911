//! Page Surface
//!
//! The controller never touches a real page. It renders through a
//! [`RenderSink`], addressing page areas by [`Region`] and submit controls by
//! [`FormId`]. [`MemorySurface`] keeps the whole page in memory.

mod memory;

pub use memory::{MemorySurface, PageState, RegionState};

use serde::Serialize;

/// A page area the controller renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Region {
    #[serde(rename = "lojas-list")]
    StoreList,
    #[serde(rename = "associacao-mensagem")]
    AssociationMessage,
    #[serde(rename = "dashboard")]
    Dashboard,
    #[serde(rename = "historico")]
    History,
    #[serde(rename = "venda-mensagem")]
    SaleMessage,
    #[serde(rename = "produtos-list")]
    ProductList,
}

impl Region {
    /// Element id of the region on the page
    pub fn dom_id(&self) -> &'static str {
        match self {
            Region::StoreList => "lojas-list",
            Region::AssociationMessage => "associacao-mensagem",
            Region::Dashboard => "dashboard",
            Region::History => "historico",
            Region::SaleMessage => "venda-mensagem",
            Region::ProductList => "produtos-list",
        }
    }
}

/// A form whose submit control the controller toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FormId {
    #[serde(rename = "cadastro-loja-form")]
    RegisterStore,
    #[serde(rename = "associar-produto-form")]
    AssociateProduct,
    #[serde(rename = "dashboard-form")]
    Dashboard,
    #[serde(rename = "venda-form")]
    RecordSale,
}

impl FormId {
    /// Element id of the form on the page
    pub fn dom_id(&self) -> &'static str {
        match self {
            FormId::RegisterStore => "cadastro-loja-form",
            FormId::AssociateProduct => "associar-produto-form",
            FormId::Dashboard => "dashboard-form",
            FormId::RecordSale => "venda-form",
        }
    }

    /// Label shown on the submit control while a request is in flight
    pub fn busy_label(&self) -> &'static str {
        match self {
            FormId::RegisterStore => "⏳ Cadastrando...",
            FormId::AssociateProduct => "⏳ Associando...",
            FormId::Dashboard => "⏳ Carregando...",
            FormId::RecordSale => "⏳ Registrando...",
        }
    }

    /// Input field ids belonging to the form
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FormId::RegisterStore => &["nome", "descricao", "endereco", "contato"],
            FormId::AssociateProduct => {
                &["loja-id", "produto-id", "quantidade-estoque", "preco-loja"]
            }
            FormId::Dashboard => &["dashboard-loja-id"],
            FormId::RecordSale => &["venda-loja-id", "venda-produto-id", "quantidade", "valor-total"],
        }
    }
}

/// Status of a transient banner, used as its CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }

    /// Class set on the region while the banner is shown
    pub fn banner_class(&self) -> String {
        format!("show {}", self.as_str())
    }
}

/// Submit control state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub label: String,
    pub disabled: bool,
}

impl ControlState {
    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }
}

/// Render target injected into the controller
///
/// Writes may come from spawned banner timers, so implementations must be
/// shareable across tasks.
pub trait RenderSink: Send + Sync {
    /// Replace the markup of a region
    fn set_html(&self, region: Region, html: String);

    /// Replace the class of a region; `None` clears it
    fn set_class(&self, region: Region, class: Option<&str>);

    /// Set the opacity of a region (0.0 to 1.0)
    fn set_opacity(&self, region: Region, opacity: f32);

    /// Current state of a form's submit control
    fn control(&self, form: FormId) -> ControlState;

    /// Update a form's submit control
    fn set_control(&self, form: FormId, state: ControlState);

    /// Clear every input of a form
    fn reset_form(&self, form: FormId);
}
