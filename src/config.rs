use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::trivia::pagination::QUESTIONS_PER_PAGE;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub listen_addr: String,
    pub page_size: usize,
    pub cors_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite:trivia.db".to_owned(),
            listen_addr: "0.0.0.0:8080".to_owned(),
            page_size: QUESTIONS_PER_PAGE,
            cors_origins: vec!["*".to_owned()],
        }
    }
}

impl Settings {
    /// Defaults, then `trivia.toml` if present, then `TRIVIA_*` variables
    /// (`.env` included). `TRIVIA_CORS_ORIGINS` is a comma separated list.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let defaults = Settings::default();
        Config::builder()
            .set_default("database_url", defaults.database_url)?
            .set_default("listen_addr", defaults.listen_addr)?
            .set_default("page_size", defaults.page_size as u64)?
            .set_default("cors_origins", defaults.cors_origins)?
            .add_source(File::with_name("trivia").required(false))
            .add_source(
                Environment::with_prefix("TRIVIA")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_origins"),
            )
            .build()?
            .try_deserialize::<Settings>()?
            .validate()
    }

    /// A zero page size would make every page empty.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message(
                "page_size must be at least 1".to_owned(),
            ));
        }
        Ok(self)
    }
}
