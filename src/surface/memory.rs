//! In-memory page
//!
//! Holds region markup, classes, opacity, submit controls and form inputs.
//! Used by the CLI to print what a page would show, and by tests as the fake
//! render sink.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{ControlState, FormId, Region, RenderSink};

/// Rendered state of one region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionState {
    pub html: String,
    pub class: Option<String>,
    pub opacity: f32,
}

impl Default for RegionState {
    fn default() -> Self {
        Self {
            html: String::new(),
            class: None,
            opacity: 1.0,
        }
    }
}

/// Snapshot of the whole page
///
/// Only regions that have been written appear in `regions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageState {
    pub regions: BTreeMap<Region, RegionState>,
    pub controls: BTreeMap<FormId, ControlState>,
    pub forms: BTreeMap<FormId, BTreeMap<String, String>>,
}

/// [`RenderSink`] backed by a [`PageState`]
#[derive(Debug)]
pub struct MemorySurface {
    page: Mutex<PageState>,
}

impl MemorySurface {
    /// A page with the default submit labels and empty forms
    pub fn new() -> Self {
        let mut page = PageState::default();
        for (form, label) in [
            (FormId::RegisterStore, "🏪 Cadastrar Loja"),
            (FormId::AssociateProduct, "🔗 Associar Produto"),
            (FormId::Dashboard, "📊 Ver Dashboard"),
            (FormId::RecordSale, "💰 Registrar Venda"),
        ] {
            page.controls.insert(form, ControlState::enabled(label));
            page.forms.insert(
                form,
                form.fields()
                    .iter()
                    .map(|field| (field.to_string(), String::new()))
                    .collect(),
            );
        }

        Self {
            page: Mutex::new(page),
        }
    }

    fn page(&self) -> MutexGuard<'_, PageState> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// State of one region, default if never written
    pub fn region(&self, region: Region) -> RegionState {
        self.page().regions.get(&region).cloned().unwrap_or_default()
    }

    /// Current markup of a region
    pub fn html(&self, region: Region) -> String {
        self.region(region).html
    }

    /// Type into a form input
    pub fn set_field(&self, form: FormId, field: &str, value: &str) {
        self.page()
            .forms
            .entry(form)
            .or_default()
            .insert(field.to_string(), value.to_string());
    }

    /// Current value of a form input
    pub fn field(&self, form: FormId, field: &str) -> String {
        self.page()
            .forms
            .get(&form)
            .and_then(|fields| fields.get(field))
            .cloned()
            .unwrap_or_default()
    }

    /// Copy of the whole page
    pub fn snapshot(&self) -> PageState {
        self.page().clone()
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for MemorySurface {
    fn set_html(&self, region: Region, html: String) {
        self.page().regions.entry(region).or_default().html = html;
    }

    fn set_class(&self, region: Region, class: Option<&str>) {
        self.page().regions.entry(region).or_default().class = class.map(str::to_string);
    }

    fn set_opacity(&self, region: Region, opacity: f32) {
        self.page().regions.entry(region).or_default().opacity = opacity.clamp(0.0, 1.0);
    }

    fn control(&self, form: FormId) -> ControlState {
        self.page()
            .controls
            .get(&form)
            .cloned()
            .unwrap_or_else(|| ControlState::enabled(""))
    }

    fn set_control(&self, form: FormId, state: ControlState) {
        self.page().controls.insert(form, state);
    }

    fn reset_form(&self, form: FormId) {
        if let Some(fields) = self.page().forms.get_mut(&form) {
            fields.values_mut().for_each(String::clear);
        }
    }
}
