use super::draft::ProductDraft;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::ProductCategory;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара. Выдаётся каталогом при добавлении.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Следующий идентификатор в последовательности
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id: {}", e))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар (строка инвентаря)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: Option<ProductCategory>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub metadata: EntityMetadata,
}

impl Product {
    /// Создать товар из черновика формы
    pub fn from_draft(id: ProductId, draft: &ProductDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            category: draft.category,
            quantity: draft.quantity,
            price: draft.price,
            metadata: EntityMetadata::new(),
        }
    }

    /// Стоимость остатка: цена × количество
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Название категории для таблицы, "-" если не выбрана
    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.display_name()).unwrap_or("-")
    }

    /// Хук перед записью отредактированной версии
    pub fn before_write(&mut self) {
        let metadata = self.metadata_mut();
        metadata.touch();
        metadata.increment_version();
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_from_string() {
        assert_eq!(ProductId::from_string(" 42 "), Ok(ProductId::new(42)));
        assert!(ProductId::from_string("abc").is_err());
        assert_eq!(ProductId::new(42).as_string(), "42");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Product::full_name(), "a001_product");
    }

    #[test]
    fn test_deserialize_without_metadata() {
        let json = r#"{"id": 3, "name": "Mouse", "category": "PC", "quantity": 5, "price": 19.99}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.category, Some(ProductCategory::Pc));
        assert_eq!(product.metadata.version, 0);
        assert_eq!(product.category_label(), "PC");
    }

    #[test]
    fn test_before_write_bumps_version() {
        let mut product = Product::from_draft(ProductId::new(1), &ProductDraft::default());
        let created = product.metadata.created_at;
        product.before_write();
        assert_eq!(product.metadata.version, 1);
        assert_eq!(product.metadata.created_at, created);
        assert!(product.metadata.updated_at >= created);
    }

    #[test]
    fn test_stock_value() {
        let mut product = Product::from_draft(ProductId::new(1), &ProductDraft::default());
        product.price = 2.5;
        product.quantity = 4;
        assert_eq!(product.stock_value(), 10.0);
    }
}
