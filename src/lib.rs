mod app_state;
mod config;
pub mod database;
pub mod models;
pub mod routes;
pub mod session;
pub use app_state::AppState;
pub use config::Config;
