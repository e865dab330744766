//! Server Configuration
//!
//! Read once from the environment at startup.

use anyhow::Context;
use auth::AuthConfig;
use news::NewsConfig;
use news::application::config::DEFAULT_BASE_URL;
use std::env;
use std::net::SocketAddr;

/// Fixed listen address
pub const LISTEN_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);

pub struct ServerConfig {
    pub database_url: String,
    pub auth: AuthConfig,
    pub news: NewsConfig,
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let api_key = required("API_KEY")?;
        let news_api_url =
            env::var("NEWS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            database_url,
            auth: AuthConfig::new(jwt_secret.into_bytes()),
            news: NewsConfig::new(api_key).with_base_url(news_api_url),
            addr: SocketAddr::from(LISTEN_ADDR),
        })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    let value = env::var(name).with_context(|| format!("{name} must be set in environment"))?;
    anyhow::ensure!(!value.is_empty(), "{name} must not be empty");
    Ok(value)
}
