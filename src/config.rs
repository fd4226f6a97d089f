use serde::{Deserialize, Serialize};
use std::fs;

/// Default Shopify Admin API version when none is configured.
pub const DEFAULT_API_VERSION: &str = "2024-07";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub server: ServerConfig,
    #[serde(default)]
    pub shopify: ShopifyConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream Shopify store coordinates.
///
/// `store_domain` and `access_token` are required for every relay call;
/// they are usually injected via `SHOPIFY_STORE_DOMAIN` / `SHOPIFY_ADMIN_TOKEN`
/// rather than committed to a config file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShopifyConfig {
    #[serde(default)]
    pub store_domain: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            store_domain: None,
            api_version: default_api_version(),
            access_token: None,
        }
    }
}

impl ShopifyConfig {
    /// Overlay environment variables on top of file-sourced values.
    ///
    /// Recognized: `SHOPIFY_STORE_DOMAIN`, `SHOPIFY_API_VERSION`,
    /// `SHOPIFY_ADMIN_TOKEN`. Empty values are treated as unset.
    pub fn apply_env(mut self) -> Self {
        if let Some(domain) = env_var("SHOPIFY_STORE_DOMAIN") {
            self.store_domain = Some(domain);
        }
        if let Some(version) = env_var("SHOPIFY_API_VERSION") {
            self.api_version = version;
        }
        if let Some(token) = env_var("SHOPIFY_ADMIN_TOKEN") {
            self.access_token = Some(token);
        }
        self
    }

    /// True when both required upstream credentials are present.
    pub fn is_complete(&self) -> bool {
        has_value(&self.store_domain) && has_value(&self.access_token)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn has_value(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.is_empty())
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shopify_config_defaults() {
        let config = ShopifyConfig::default();
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert!(config.store_domain.is_none());
        assert!(config.access_token.is_none());
        assert!(!config.is_complete());
    }

    #[test]
    fn test_is_complete_requires_domain_and_token() {
        let mut config = ShopifyConfig {
            store_domain: Some("shop.myshopify.com".to_string()),
            ..Default::default()
        };
        assert!(!config.is_complete());

        config.access_token = Some("shpat_test".to_string());
        assert!(config.is_complete());

        // Empty strings count as missing
        config.store_domain = Some(String::new());
        assert!(!config.is_complete());
    }

    #[test]
    fn test_yaml_shopify_section_optional() {
        let yaml = r#"
log_level: "info"
log_dir: "./logs"
log_file: "relay.log"
use_json: false
rotation: "daily"
server:
  host: "0.0.0.0"
  port: 3000
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.shopify.api_version, DEFAULT_API_VERSION);
    }
}
