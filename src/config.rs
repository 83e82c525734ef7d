use std::env;

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub port: u16,
}

impl Config {
    pub fn init() -> Config {
        // `mode=rwc` lets SQLite create the database file on first run.
        let db_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://shiftboard.db?mode=rwc".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        Config { db_url, port }
    }
}
