use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bitrix_base_url: String,
    pub notify_user_id: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            bitrix_base_url: std::env::var("BITRIX_WEBHOOK_URL")
                .map_err(|_| anyhow::anyhow!("BITRIX_WEBHOOK_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("BITRIX_WEBHOOK_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("BITRIX_WEBHOOK_URL must start with http:// or https://");
                    }
                    url::Url::parse(&url).map_err(|e| {
                        anyhow::anyhow!("BITRIX_WEBHOOK_URL is not a valid URL: {}", e)
                    })?;
                    // REST method names are appended directly to the base URL
                    if url.ends_with('/') {
                        Ok(url)
                    } else {
                        Ok(format!("{}/", url))
                    }
                })?,
            notify_user_id: std::env::var("NOTIFY_USER_ID")
                .map_err(|_| anyhow::anyhow!("NOTIFY_USER_ID environment variable required"))
                .and_then(|id| {
                    if id.trim().is_empty() {
                        anyhow::bail!("NOTIFY_USER_ID cannot be empty");
                    }
                    Ok(id)
                })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
        };

        // The base URL embeds the access token, never log it
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Notify user id: {}", config.notify_user_id);
        tracing::debug!("Server port: {}", config.port);

        Ok(config)
    }
}
