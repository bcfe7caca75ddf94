use std::env;

use super::env::{
    AppConfig, ConfigError, DirectoryConfig, LoggingConfig, SchedulerConfig, ScraperConfig,
};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            env::var("RAPIDAPI_KEY").map_err(|_| ConfigError::Missing("RAPIDAPI_KEY"))?;

        let scraper = ScraperConfig {
            api_key,
            host: env::var("RAPIDAPI_HOST")
                .unwrap_or_else(|_| "facebook-scraper3.p.rapidapi.com".to_string()),
            group_id: env::var("FACEBOOK_GROUP_ID")
                .unwrap_or_else(|_| "142026696530246".to_string()),
            sorting_order: env::var("FEED_SORTING_ORDER")
                .unwrap_or_else(|_| "CHRONOLOGICAL".to_string()),
            fetch_timeout: std::time::Duration::from_millis(
                env::var("FEED_FETCH_TIMEOUT")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(15_000),
            ),
        };

        let directories = DirectoryConfig {
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            db_filename: env::var("DB_FILENAME").unwrap_or_else(|_| "posts.db".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        let timezone = env::var("APP_TIMEZONE").unwrap_or_else(|_| "Asia/Ho_Chi_Minh".to_string());

        let scheduler = SchedulerConfig {
            cron_specs: env::var("INGEST_CRONS")
                .map(|value| {
                    value
                        .split(';')
                        .map(|part| part.trim().to_string())
                        .filter(|part| !part.is_empty())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_else(|_| vec!["0 0 * * * *".to_string(), "0 30 * * * *".to_string()]),
        };

        Ok(Self {
            scraper,
            directories,
            logging,
            timezone,
            scheduler,
        })
    }
}
