use serde::{Deserialize, Serialize};

/// Категории товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "Electronics")]
    Electronics,
    #[serde(rename = "TV")]
    TvMonitors,
    #[serde(rename = "PC")]
    Pc,
    #[serde(rename = "GA")]
    GamingConsole,
    #[serde(rename = "PH")]
    Phones,
}

impl ProductCategory {
    /// Код категории (значение option в форме)
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::TvMonitors => "TV",
            ProductCategory::Pc => "PC",
            ProductCategory::GamingConsole => "GA",
            ProductCategory::Phones => "PH",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::TvMonitors => "TV/Monitors",
            ProductCategory::Pc => "PC",
            ProductCategory::GamingConsole => "Gaming/Console",
            ProductCategory::Phones => "Phones",
        }
    }

    /// Все категории в порядке отображения
    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Electronics,
            ProductCategory::TvMonitors,
            ProductCategory::Pc,
            ProductCategory::GamingConsole,
            ProductCategory::Phones,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Electronics" => Some(ProductCategory::Electronics),
            "TV" => Some(ProductCategory::TvMonitors),
            "PC" => Some(ProductCategory::Pc),
            "GA" => Some(ProductCategory::GamingConsole),
            "PH" => Some(ProductCategory::Phones),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for category in ProductCategory::all() {
            assert_eq!(ProductCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(ProductCategory::from_code(""), None);
        assert_eq!(ProductCategory::from_code("tv"), None);
    }

    #[test]
    fn test_serde_uses_form_codes() {
        let json = serde_json::to_string(&ProductCategory::GamingConsole).unwrap();
        assert_eq!(json, "\"GA\"");
        let parsed: ProductCategory = serde_json::from_str("\"TV\"").unwrap();
        assert_eq!(parsed, ProductCategory::TvMonitors);
    }
}
