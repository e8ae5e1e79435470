use contracts::domain::a001_product::{Product, ProductCatalog, ProductDraft, ProductId};
use contracts::shared::error::InventoryError;
use leptos::prelude::*;

/// Which dialog is open, and for which product.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Add,
    Edit(Product),
    Delete(Product),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Product the dialog works on; `None` for Add and Closed
    pub fn target(&self) -> Option<&Product> {
        match self {
            ModalState::Edit(p) | ModalState::Delete(p) => Some(p),
            ModalState::Add | ModalState::Closed => None,
        }
    }
}

/// Open row menu. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: Option<ProductId>,
}

impl DropdownState {
    pub fn open_id(&self) -> Option<ProductId> {
        self.open
    }

    pub fn is_open(&self, id: ProductId) -> bool {
        self.open == Some(id)
    }

    pub fn toggle(&mut self, id: ProductId) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    pub catalog: ProductCatalog,
    pub modal: ModalState,
    pub dropdown: DropdownState,
    /// Last recovered error, shown above the table
    pub notice: Option<String>,
}

impl ProductListState {
    pub fn with_catalog(catalog: ProductCatalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn open_add_modal(&mut self) {
        self.dropdown.close();
        self.modal = ModalState::Add;
    }

    pub fn open_edit_modal(&mut self, product: Product) {
        self.dropdown.close();
        self.modal = ModalState::Edit(product);
    }

    pub fn open_delete_modal(&mut self, product: Product) {
        self.dropdown.close();
        self.modal = ModalState::Delete(product);
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn add_product(&mut self, draft: &ProductDraft) -> Product {
        let product = self.catalog.add(draft);
        self.notice = None;
        self.close_modal();
        product
    }

    pub fn edit_product(&mut self, product: Product) -> Result<(), InventoryError> {
        let result = self.catalog.replace(product);
        self.record(&result);
        self.close_modal();
        result
    }

    pub fn delete_product(&mut self, id: ProductId) -> Result<usize, InventoryError> {
        let result = self.catalog.remove(id);
        self.record(&result);
        if self.dropdown.is_open(id) {
            self.dropdown.close();
        }
        self.close_modal();
        result
    }

    pub fn toggle_dropdown(&mut self, id: ProductId) {
        self.dropdown.toggle(id);
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown.close();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn record<T>(&mut self, result: &Result<T, InventoryError>) {
        self.notice = match result {
            Ok(_) => None,
            Err(e) => {
                log::warn!("{}", e);
                Some(e.to_string())
            }
        };
    }
}

pub fn create_state(seed: Vec<Product>) -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::with_catalog(ProductCatalog::from_products(seed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductField;
    use contracts::enums::ProductCategory;

    fn mouse_draft() -> ProductDraft {
        let mut draft = ProductDraft::default();
        draft.set_field(ProductField::Name, "Mouse").unwrap();
        draft.set_field(ProductField::Price, "19.99").unwrap();
        draft.set_field(ProductField::Category, "PC").unwrap();
        draft.set_field(ProductField::Quantity, "5").unwrap();
        draft
    }

    #[test]
    fn test_open_modes() {
        let mut state = ProductListState::default();
        state.open_add_modal();
        assert_eq!(state.modal, ModalState::Add);
        assert!(state.modal.target().is_none());

        let product = state.add_product(&mouse_draft());
        state.open_edit_modal(product.clone());
        assert_eq!(state.modal.target(), Some(&product));

        state.open_delete_modal(product.clone());
        assert_eq!(state.modal, ModalState::Delete(product));

        state.close_modal();
        assert!(!state.modal.is_open());
    }

    #[test]
    fn test_add_from_empty_assigns_id_and_closes() {
        let mut state = ProductListState::default();
        state.open_add_modal();
        state.add_product(&mouse_draft());

        let products = state.catalog.products();
        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.name, "Mouse");
        assert_eq!(p.price, 19.99);
        assert_eq!(p.category, Some(ProductCategory::Pc));
        assert_eq!(p.quantity, 5);
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn test_delete_confirm_empties_collection() {
        let mut state = ProductListState::default();
        let a = state.add_product(&ProductDraft {
            name: "A".to_string(),
            price: 1.0,
            ..Default::default()
        });
        assert_eq!(a.id, ProductId::new(1));

        state.open_delete_modal(a.clone());
        state.delete_product(a.id).unwrap();

        assert!(state.catalog.is_empty());
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut state = ProductListState::default();
        let a = state.add_product(&mouse_draft());
        let b = state.add_product(&mouse_draft());

        let mut draft = ProductDraft::from_product(&a);
        draft.set_field(ProductField::Name, "Trackball").unwrap();
        state.open_edit_modal(a.clone());
        state.edit_product(draft.apply_to(&a)).unwrap();

        assert_eq!(state.catalog.ids(), vec![a.id, b.id]);
        assert_eq!(state.catalog.products()[0].name, "Trackball");
        assert_eq!(state.catalog.products()[1], b);
        assert!(!state.modal.is_open());
    }

    #[test]
    fn test_missing_target_sets_notice() {
        let mut state = ProductListState::default();
        let a = state.add_product(&mouse_draft());
        state.delete_product(a.id).unwrap();

        state.open_edit_modal(a.clone());
        let err = state.edit_product(a.clone()).unwrap_err();
        assert_eq!(err, InventoryError::NotFound(a.id));
        assert_eq!(state.notice.as_deref(), Some("Product 1 not found"));
        assert!(state.catalog.is_empty());

        assert!(state.delete_product(a.id).is_err());
        state.dismiss_notice();
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_toggle_dropdown() {
        let mut state = ProductListState::default();
        let one = ProductId::new(1);
        let two = ProductId::new(2);

        state.toggle_dropdown(one);
        state.toggle_dropdown(one);
        assert_eq!(state.dropdown.open_id(), None);

        state.toggle_dropdown(one);
        state.toggle_dropdown(two);
        assert!(!state.dropdown.is_open(one));
        assert!(state.dropdown.is_open(two));

        state.close_dropdown();
        assert_eq!(state.dropdown, DropdownState::default());
    }

    #[test]
    fn test_delete_closes_dropdown_of_deleted_row() {
        let mut state = ProductListState::default();
        let a = state.add_product(&mouse_draft());
        let b = state.add_product(&mouse_draft());

        state.toggle_dropdown(a.id);
        state.delete_product(a.id).unwrap();
        assert_eq!(state.dropdown.open_id(), None);

        // меню другой строки остаётся открытым
        state.toggle_dropdown(b.id);
        assert!(state.delete_product(a.id).is_err());
        assert_eq!(state.dropdown.open_id(), Some(b.id));
    }

    #[test]
    fn test_opening_modal_closes_dropdown() {
        let mut state = ProductListState::default();
        let a = state.add_product(&mouse_draft());
        state.toggle_dropdown(a.id);
        state.open_edit_modal(a);
        assert_eq!(state.dropdown.open_id(), None);
    }
}
