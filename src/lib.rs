pub mod config;
pub mod controllers;
pub mod database;
pub mod models;
pub mod services;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
}
