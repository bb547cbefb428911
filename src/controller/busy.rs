//! Submit control busy state

use crate::surface::{ControlState, FormId, RenderSink};

/// Disables a form's submit control and shows its busy label until dropped
///
/// Dropping re-enables the control with the label it had before, also when
/// the handler unwinds.
pub(crate) struct BusyGuard<'a> {
    sink: &'a dyn RenderSink,
    form: FormId,
    original_label: String,
}

impl<'a> BusyGuard<'a> {
    pub(crate) fn engage(sink: &'a dyn RenderSink, form: FormId) -> Self {
        let original_label = sink.control(form).label;
        sink.set_control(
            form,
            ControlState {
                label: form.busy_label().to_string(),
                disabled: true,
            },
        );

        Self {
            sink,
            form,
            original_label,
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let label = std::mem::take(&mut self.original_label);
        self.sink.set_control(self.form, ControlState::enabled(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_guard_restores_label() {
        let surface = MemorySurface::new();
        {
            let _busy = BusyGuard::engage(&surface, FormId::AssociateProduct);
            let control = surface.control(FormId::AssociateProduct);
            assert!(control.disabled);
            assert_eq!(control.label, "⏳ Associando...");
        }
        let control = surface.control(FormId::AssociateProduct);
        assert!(!control.disabled);
        assert_eq!(control.label, "🔗 Associar Produto");
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let surface = MemorySurface::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _busy = BusyGuard::engage(&surface, FormId::Dashboard);
            panic!("render failed");
        }));

        assert!(result.is_err());
        let control = surface.control(FormId::Dashboard);
        assert!(!control.disabled);
        assert_eq!(control.label, "📊 Ver Dashboard");
    }
}
