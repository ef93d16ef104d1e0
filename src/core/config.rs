use super::error::{AppError, AppResult};
use dotenv::dotenv;
use std::env;
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub bot_id: i64,
    pub bot_nick: String,
    pub bot_token: Option<String>,
    pub request_timeout_secs: u64,
    pub app_env: String,
}

impl Config {
    /// Configurazione minima, gli altri campi prendono i valori di default
    pub fn new(base_url: impl Into<String>, bot_id: i64) -> Self {
        Self {
            base_url: base_url.into(),
            bot_id,
            bot_nick: "bot".to_string(),
            bot_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            app_env: "development".to_string(),
        }
    }

    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> AppResult<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Come `from_env`, ma legge le variabili da una funzione qualsiasi
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("ANNOUNCEMENTS_BASE_URL").ok_or_else(|| {
            AppError::config("ANNOUNCEMENTS_BASE_URL must be set in .env file")
        })?;

        let bot_id = lookup("BOT_ID")
            .ok_or_else(|| AppError::config("BOT_ID must be set in .env file"))?
            .parse::<i64>()
            .map_err(|e| AppError::config("Invalid BOT_ID: must be a number").with_details(e.to_string()))?;

        let bot_nick = lookup("BOT_NICK").unwrap_or_else(|| "bot".to_string());

        let bot_token = lookup("BOT_TOKEN").filter(|t| !t.is_empty());
        if bot_token.is_none() {
            warn!("BOT_TOKEN not set, requests will be sent without authorization");
        }

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::config("Invalid REQUEST_TIMEOUT_SECS: must be a positive number")
                    .with_details(e.to_string())
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        if request_timeout_secs == 0 {
            return Err(AppError::config(
                "Invalid REQUEST_TIMEOUT_SECS: must be a positive number",
            ));
        }

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_id,
            bot_nick,
            bot_token,
            request_timeout_secs,
            app_env,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        let token = if self.bot_token.is_some() {
            "configured"
        } else {
            "missing"
        };
        info!(
            environment = %self.app_env,
            base_url = %Self::mask_url(&self.base_url),
            bot_id = self.bot_id,
            bot_nick = %self.bot_nick,
            timeout_secs = self.request_timeout_secs,
            token,
            "Announcements client configuration"
        );
    }

    /// Maschera le credenziali eventualmente presenti nell'URL
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        url.to_string()
    }
}
