use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub shopify: ShopifyConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Подключение к Admin API магазина
#[derive(Debug, Deserialize, Clone)]
pub struct ShopifyConfig {
    /// Домен магазина, например `example.myshopify.com`
    pub shop: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Client ID приложения; ожидаемый `aud` session token
    #[serde(default)]
    pub api_key: String,
    /// Client secret; ключ подписи session token (HS256)
    #[serde(default)]
    pub api_secret: String,
    /// Offline access token магазина
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_version() -> String {
    "2025-01".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[shopify]
shop = "example.myshopify.com"
api_version = "2025-01"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Secrets from `SHOPIFY_API_KEY`, `SHOPIFY_API_SECRET` and
/// `SHOPIFY_ACCESS_TOKEN` override the file values.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_from_file()?;
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

fn load_from_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(value) = non_empty("SHOPIFY_API_KEY") {
        config.shopify.api_key = value;
    }
    if let Some(value) = non_empty("SHOPIFY_API_SECRET") {
        config.shopify.api_secret = value;
    }
    if let Some(value) = non_empty("SHOPIFY_ACCESS_TOKEN") {
        config.shopify.access_token = value;
    }
}
