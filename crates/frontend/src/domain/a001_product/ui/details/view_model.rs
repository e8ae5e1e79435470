use crate::domain::a001_product::ui::list::state::ModalState;
use contracts::domain::a001_product::{Product, ProductDraft, ProductField, ProductId};
use leptos::prelude::*;

/// ViewModel for the product dialog
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub draft: RwSignal<ProductDraft>,
    /// Inline hint under the form (e.g. price that is not a number)
    pub error: RwSignal<Option<String>>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(ProductDraft::default()),
            error: RwSignal::new(None),
        }
    }

    /// Reset the draft for the requested mode. Delete and Closed leave it alone.
    pub fn reseed(&self, modal: &ModalState) {
        match modal {
            ModalState::Add => {
                self.draft.set(ProductDraft::default());
                self.error.set(None);
            }
            ModalState::Edit(target) => {
                self.draft.set(ProductDraft::from_product(target));
                self.error.set(None);
            }
            ModalState::Delete(_) | ModalState::Closed => {}
        }
    }

    /// Apply a keystroke to the draft. Returns `false` when the input was rejected
    /// and the field must show the previous value again.
    pub fn change_field(&self, field: ProductField, raw: String) -> bool {
        let mut draft = self.draft.get_untracked();
        match draft.set_field(field, &raw) {
            Ok(()) => {
                self.draft.set(draft);
                if field == ProductField::Price {
                    self.error.set(None);
                }
                true
            }
            Err(e) => {
                log::debug!("input {:?} ignored: {}", raw, e);
                false
            }
        }
    }

    pub fn blur_price(&self) {
        let mut draft = self.draft.get_untracked();
        match draft.format_price() {
            Ok(()) => self.draft.set(draft),
            // empty field: nothing to format and nothing to complain about
            Err(_) if draft.price_text.is_empty() => {}
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    /// Add when there is no target, edit otherwise; then close.
    pub fn submit(
        &self,
        modal: &ModalState,
        on_add: Callback<ProductDraft>,
        on_edit: Callback<Product>,
        on_close: Callback<()>,
    ) {
        let draft = self.draft.get_untracked();
        match modal {
            ModalState::Edit(target) => on_edit.run(draft.apply_to(target)),
            ModalState::Add => on_add.run(draft),
            ModalState::Delete(_) | ModalState::Closed => {
                log::warn!("submit ignored in {:?}", modal);
            }
        }
        on_close.run(());
    }

    pub fn confirm_delete(
        &self,
        modal: &ModalState,
        on_delete: Callback<ProductId>,
        on_close: Callback<()>,
    ) {
        if let ModalState::Delete(target) = modal {
            on_delete.run(target.id);
        }
        on_close.run(());
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
