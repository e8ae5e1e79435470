//! Черновик товара в диалоге создания/редактирования
//!
//! Цена редактируется как текст (не более двух знаков после точки),
//! параллельно хранится распарсенное число.

use super::aggregate::Product;
use crate::enums::ProductCategory;
use crate::shared::error::{InventoryError, ValidationReason};

/// Поле формы товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Price,
    Category,
    Quantity,
}

impl ProductField {
    /// Имя поля (атрибут `name` у input)
    pub fn name(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Price => "price",
            ProductField::Category => "category",
            ProductField::Quantity => "quantity",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ProductField::Name),
            "price" => Some(ProductField::Price),
            "category" => Some(ProductField::Category),
            "quantity" => Some(ProductField::Quantity),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductField::Name => "Name",
            ProductField::Price => "Price",
            ProductField::Category => "Category",
            ProductField::Quantity => "Quantity",
        }
    }
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Маска ввода цены: цифры, не более одной точки, не более двух знаков после неё.
/// Пустая строка допустима.
pub fn is_price_text(text: &str) -> bool {
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    match text.split_once('.') {
        Some((int_part, frac_part)) => {
            all_digits(int_part) && frac_part.len() <= 2 && all_digits(frac_part)
        }
        None => all_digits(text),
    }
}

/// Число из текста цены; `None` если в тексте нет ни одной цифры
/// или число не помещается в `f64`
pub fn parse_price_text(text: &str) -> Option<f64> {
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Округление до копеек. Значения, где `value * 100` переполняется,
/// возвращаются как есть (дробной части у них уже нет).
pub fn round_to_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    if !cents.is_finite() {
        return value;
    }
    cents.round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    /// Текст цены в том виде, в каком его видит пользователь
    pub price_text: String,
    pub category: Option<ProductCategory>,
    pub quantity: u32,
}

impl ProductDraft {
    /// Черновик, заполненный из существующего товара
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            price_text: product.price.to_string(),
            category: product.category,
            quantity: product.quantity,
        }
    }

    /// Применить ввод пользователя к полю.
    ///
    /// При ошибке черновик не меняется.
    pub fn set_field(&mut self, field: ProductField, raw: &str) -> Result<(), InventoryError> {
        match field {
            ProductField::Name => {
                self.name = raw.to_string();
                Ok(())
            }
            ProductField::Price => self.set_price_text(raw),
            ProductField::Category => self.set_category_code(raw),
            ProductField::Quantity => self.set_quantity_text(raw),
        }
    }

    fn set_price_text(&mut self, raw: &str) -> Result<(), InventoryError> {
        if !is_price_text(raw) {
            return Err(InventoryError::validation(
                ProductField::Price,
                ValidationReason::PatternMismatch,
            ));
        }
        self.price = parse_price_text(raw).unwrap_or(0.0);
        self.price_text = raw.to_string();
        Ok(())
    }

    fn set_category_code(&mut self, raw: &str) -> Result<(), InventoryError> {
        if raw.is_empty() {
            self.category = None;
            return Ok(());
        }
        let category = ProductCategory::from_code(raw).ok_or_else(|| {
            InventoryError::validation(ProductField::Category, ValidationReason::UnknownCategory)
        })?;
        self.category = Some(category);
        Ok(())
    }

    fn set_quantity_text(&mut self, raw: &str) -> Result<(), InventoryError> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.quantity = 0;
            return Ok(());
        }
        let value = raw.parse::<i64>().map_err(|_| {
            InventoryError::validation(ProductField::Quantity, ValidationReason::Unparsable)
        })?;
        if value < 0 {
            return Err(InventoryError::validation(
                ProductField::Quantity,
                ValidationReason::Negative,
            ));
        }
        self.quantity = u32::try_from(value).map_err(|_| {
            InventoryError::validation(ProductField::Quantity, ValidationReason::Unparsable)
        })?;
        Ok(())
    }

    /// Форматирование цены при потере фокуса: ровно два знака после точки.
    ///
    /// Если текст не число, он остаётся как есть.
    pub fn format_price(&mut self) -> Result<(), InventoryError> {
        let value = parse_price_text(&self.price_text).ok_or_else(|| {
            InventoryError::validation(ProductField::Price, ValidationReason::Unparsable)
        })?;
        let rounded = round_to_cents(value);
        self.price = rounded;
        self.price_text = format!("{:.2}", rounded);
        Ok(())
    }

    /// Перенести значения черновика в товар, сохранив его id и метаданные
    pub fn apply_to(&self, target: &Product) -> Product {
        let mut product = target.clone();
        product.name = self.name.clone();
        product.price = self.price;
        product.category = self.category;
        product.quantity = self.quantity;
        product
    }
}
