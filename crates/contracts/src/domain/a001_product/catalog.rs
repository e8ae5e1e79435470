use super::aggregate::{Product, ProductId};
use super::draft::ProductDraft;
use crate::shared::error::InventoryError;

/// Каталог товаров в памяти.
///
/// Порядок вставки = порядок отображения. Идентификаторы выдаёт сам каталог
/// (монотонный счётчик), поэтому в списке не бывает двух записей с одним id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
    next_id: ProductId,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: ProductId::new(1),
        }
    }

    /// Каталог с начальными данными. Повторяющиеся id отбрасываются (первый побеждает).
    pub fn from_products(seed: Vec<Product>) -> Self {
        let mut catalog = Self::new();
        for product in seed {
            if catalog.contains(product.id) {
                log::warn!("seed product {} skipped: duplicate id", product.id);
                continue;
            }
            if product.id >= catalog.next_id {
                catalog.next_id = product.id.next();
            }
            catalog.products.push(product);
        }
        catalog
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Добавить товар в конец списка, назначив ему новый id
    pub fn add(&mut self, draft: &ProductDraft) -> Product {
        let id = self.next_id;
        self.next_id = id.next();
        let product = Product::from_draft(id, draft);
        log::debug!("product {} added: {:?}", id, product.name);
        self.products.push(product.clone());
        product
    }

    /// Заменить запись с тем же id на новую версию, позиция сохраняется
    pub fn replace(&mut self, product: Product) -> Result<(), InventoryError> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(InventoryError::NotFound(product.id))?;
        let mut product = product;
        product.before_write();
        log::debug!("product {} replaced (version {})", product.id, product.metadata.version);
        *slot = product;
        Ok(())
    }

    /// Удалить все записи с данным id. Возвращает количество удалённых.
    pub fn remove(&mut self, id: ProductId) -> Result<usize, InventoryError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = before - self.products.len();
        if removed == 0 {
            return Err(InventoryError::NotFound(id));
        }
        log::debug!("product {} removed", id);
        Ok(removed)
    }

    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity)).sum()
    }

    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::stock_value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::draft::ProductField;
    use crate::enums::ProductCategory;

    fn draft(name: &str, price: &str, quantity: &str) -> ProductDraft {
        let mut d = ProductDraft::default();
        d.set_field(ProductField::Name, name).unwrap();
        d.set_field(ProductField::Price, price).unwrap();
        d.set_field(ProductField::Quantity, quantity).unwrap();
        d
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut catalog = ProductCatalog::new();
        let a = catalog.add(&draft("A", "1", "1"));
        let b = catalog.add(&draft("B", "2", "1"));
        assert_eq!(a.id, ProductId::new(1));
        assert_eq!(b.id, ProductId::new(2));
        assert_eq!(catalog.ids(), vec![ProductId::new(1), ProductId::new(2)]);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut catalog = ProductCatalog::new();
        let a = catalog.add(&draft("A", "1", "1"));
        catalog.remove(a.id).unwrap();
        let b = catalog.add(&draft("B", "1", "1"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_add_then_delete_restores_previous_state() {
        let mut catalog = ProductCatalog::new();
        catalog.add(&draft("Keyboard", "49.90", "3"));
        let before = catalog.products().to_vec();

        let added = catalog.add(&draft("Mouse", "19.99", "5"));
        catalog.remove(added.id).unwrap();

        assert_eq!(catalog.products(), before.as_slice());
    }

    #[test]
    fn test_replace_keeps_order_and_other_entries() {
        let mut catalog = ProductCatalog::new();
        let a = catalog.add(&draft("A", "1", "1"));
        let b = catalog.add(&draft("B", "2", "2"));
        let c = catalog.add(&draft("C", "3", "3"));

        let mut edited = b.clone();
        edited.name = "B2".to_string();
        edited.price = 22.5;
        edited.category = Some(ProductCategory::Pc);
        catalog.replace(edited).unwrap();

        let products = catalog.products();
        assert_eq!(catalog.ids(), vec![a.id, b.id, c.id]);
        assert_eq!(products[0], a);
        assert_eq!(products[2], c);
        assert_eq!(products[1].name, "B2");
        assert_eq!(products[1].price, 22.5);
        assert_eq!(products[1].category, Some(ProductCategory::Pc));
        assert_eq!(products[1].metadata.version, 1);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut catalog = ProductCatalog::new();
        let a = catalog.add(&draft("A", "1", "1"));
        let before = catalog.clone();

        let mut ghost = a.clone();
        ghost.id = ProductId::new(99);
        let err = catalog.replace(ghost).unwrap_err();
        assert_eq!(err, InventoryError::NotFound(ProductId::new(99)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut catalog = ProductCatalog::new();
        catalog.add(&draft("A", "1", "1"));
        assert_eq!(
            catalog.remove(ProductId::new(5)),
            Err(InventoryError::NotFound(ProductId::new(5)))
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_products_continues_after_max_id() {
        let seed = vec![
            Product::from_draft(ProductId::new(7), &draft("A", "1", "1")),
            Product::from_draft(ProductId::new(3), &draft("B", "1", "1")),
            Product::from_draft(ProductId::new(7), &draft("dup", "1", "1")),
        ];
        let mut catalog = ProductCatalog::from_products(seed);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ProductId::new(7)).map(|p| p.name.as_str()), Some("A"));
        assert_eq!(catalog.add(&draft("C", "1", "1")).id, ProductId::new(8));
    }

    #[test]
    fn test_totals() {
        let mut catalog = ProductCatalog::new();
        catalog.add(&draft("A", "2.50", "4"));
        catalog.add(&draft("B", "10", "1"));
        assert_eq!(catalog.total_quantity(), 5);
        assert_eq!(catalog.total_value(), 20.0);
        assert!(!catalog.is_empty());
    }
}
