use contracts::domain::a001_product::Product;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Товары, с которыми открывается экран
    #[serde(default)]
    pub seed_products: Vec<Product>,
}

/// Overrides taken from the page query string, e.g. `?log_level=info&currency=€`
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub currency: Option<String>,
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
{
    "log_level": "debug",
    "currency_symbol": "$",
    "seed_products": []
}
"#;

impl AppConfig {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(DEFAULT_CONFIG)
    }

    /// Parsed log level; unknown names fall back to `Debug`
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(currency) = overrides.currency.filter(|c| !c.is_empty()) {
            self.currency_symbol = currency;
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            currency_symbol: default_currency_symbol(),
            seed_products: Vec::new(),
        }
    }
}

pub fn parse_overrides(query: &str) -> anyhow::Result<ConfigOverrides> {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        return Ok(ConfigOverrides::default());
    }
    Ok(serde_qs::from_str(query)?)
}

/// Build configuration from the embedded defaults plus query-string overrides.
pub fn load_config_from(query: &str) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::embedded()?;
    config.apply(parse_overrides(query)?);
    Ok(config)
}

/// Load configuration for the running page.
///
/// Search order:
/// 1. Query string of the current location
/// 2. Falls back to embedded default config
pub fn load_config() -> AppConfig {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    match load_config_from(&query) {
        Ok(config) => {
            log::info!("Config loaded (query: {:?})", query);
            config
        }
        Err(e) => {
            log::warn!("Bad config overrides {:?}: {}. Using defaults", query, e);
            AppConfig::embedded().unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductId;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::embedded().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.level(), log::Level::Debug);
    }

    #[test]
    fn test_query_overrides() {
        let config = load_config_from("?log_level=info&currency=%E2%82%AC").unwrap();
        assert_eq!(config.level(), log::Level::Info);
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_empty_query_keeps_defaults() {
        assert_eq!(load_config_from("").unwrap(), AppConfig::default());
        assert_eq!(load_config_from("?").unwrap(), AppConfig::default());
        assert_eq!(parse_overrides("?").unwrap(), ConfigOverrides::default());
    }

    #[test]
    fn test_empty_currency_is_ignored() {
        let config = load_config_from("currency=").unwrap();
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_unknown_level_falls_back_to_debug() {
        let config = load_config_from("log_level=loud").unwrap();
        assert_eq!(config.level(), log::Level::Debug);
    }

    #[test]
    fn test_seed_products_from_json() {
        let config = AppConfig::from_json(
            r#"{"seed_products": [{"id": 1, "name": "A", "price": 1, "quantity": 2}]}"#,
        )
        .unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.seed_products.len(), 1);
        assert_eq!(config.seed_products[0].id, ProductId::new(1));
        assert_eq!(config.seed_products[0].category, None);
    }
}
