//! Ошибки домена инвентаря
//!
//! Все ошибки восстанавливаемые: операция становится no-op, UI показывает подсказку.

use crate::domain::a001_product::aggregate::ProductId;
use crate::domain::a001_product::draft::ProductField;
use thiserror::Error;

/// Причина отклонения значения поля
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Текст не соответствует маске ввода
    PatternMismatch,
    /// Текст соответствует маске, но не является числом
    Unparsable,
    /// Отрицательное значение там, где допустимы только >= 0
    Negative,
    /// Код категории вне фиксированного набора
    UnknownCategory,
}

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ValidationReason::PatternMismatch => "does not match the expected format",
            ValidationReason::Unparsable => "is not a number",
            ValidationReason::Negative => "must not be negative",
            ValidationReason::UnknownCategory => "is not a known category",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    #[error("{field} {reason}")]
    Validation {
        field: ProductField,
        reason: ValidationReason,
    },

    #[error("Product {0} not found")]
    NotFound(ProductId),
}

impl InventoryError {
    pub fn validation(field: ProductField, reason: ValidationReason) -> Self {
        InventoryError::Validation { field, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = InventoryError::validation(ProductField::Price, ValidationReason::Unparsable);
        assert_eq!(err.to_string(), "Price is not a number");

        let err = InventoryError::NotFound(ProductId::new(7));
        assert_eq!(err.to_string(), "Product 7 not found");
    }
}
