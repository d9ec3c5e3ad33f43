use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the store service listens on.
    pub port: u16,
    /// Base URL the client application targets for all API calls.
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3015".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            api_base_url: std::env::var("API_URL")
                .unwrap_or_else(|_| "http://localhost:3015".to_string())
                .trim_end_matches('/')
                .to_string(),
        };

        if !config.api_base_url.starts_with("http://")
            && !config.api_base_url.starts_with("https://")
        {
            anyhow::bail!("API_URL must start with http:// or https://");
        }

        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("API Base URL: {}", config.api_base_url);

        Ok(config)
    }
}
