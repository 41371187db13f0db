use serde::Deserialize;
use std::env;
use std::time::Duration;

const DEV_ADMIN_JWT_SECRET: &str = "savesora-dev-admin-secret";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Admin panel
    pub admin_email: String,
    pub admin_password: String,
    pub admin_jwt_secret: String,
    pub admin_session_hours: i64,
    // Human verification
    pub verification_mode: VerificationModeSetting,
    pub verification_delay_ms: u64,
    pub verification_timeout_secs: u64,
    // Metadata backend
    pub metadata_backend_url: String,
    pub simulate_backend: bool,
    pub metadata_cache_enabled: bool,
    // Download simulation
    pub progress_tick_ms: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationModeSetting {
    Simulated,
    External,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let environment = match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string())
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        let admin_jwt_secret = match env::var("ADMIN_JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if environment == Environment::Development => DEV_ADMIN_JWT_SECRET.to_string(),
            Err(e) => return Err(format!("ADMIN_JWT_SECRET: {}", e).into()),
        };

        let config = Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://savesora.db".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment,
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@savesora.com".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
            admin_jwt_secret,
            admin_session_hours: env::var("ADMIN_SESSION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()?,
            verification_mode: match env::var("VERIFICATION_MODE")
                .unwrap_or_else(|_| "simulated".to_string())
                .to_lowercase()
                .as_str()
            {
                "external" => VerificationModeSetting::External,
                _ => VerificationModeSetting::Simulated,
            },
            verification_delay_ms: env::var("VERIFICATION_DELAY_MS")
                .unwrap_or_else(|_| "1500".to_string())
                .parse()?,
            verification_timeout_secs: env::var("VERIFICATION_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()?,
            metadata_backend_url: env::var("METADATA_BACKEND_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000/api/download".to_string()),
            simulate_backend: parse_flag("SIMULATE_BACKEND", true),
            metadata_cache_enabled: parse_flag("METADATA_CACHE_ENABLED", false),
            progress_tick_ms: env::var("PROGRESS_TICK_MS")
                .unwrap_or_else(|_| "200".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn verification_delay(&self) -> Duration {
        Duration::from_millis(self.verification_delay_ms)
    }

    pub fn verification_timeout(&self) -> Duration {
        Duration::from_secs(self.verification_timeout_secs)
    }

    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }
}

fn parse_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|s| s.to_lowercase() == "true")
        .unwrap_or(default)
}
