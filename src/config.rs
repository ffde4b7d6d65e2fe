use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub page_size: i64,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("USERDIR_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid USERDIR_HOST: {e}"))?;

        let port: u16 = env_or("USERDIR_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid USERDIR_PORT: {e}"))?;

        let page_size: i64 = env_or("USERDIR_PAGE_SIZE", "10")
            .parse()
            .map_err(|e| format!("Invalid USERDIR_PAGE_SIZE: {e}"))?;
        if page_size < 1 {
            return Err("USERDIR_PAGE_SIZE must be at least 1".to_string());
        }

        let log_level = env_or("USERDIR_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            page_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
