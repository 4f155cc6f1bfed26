pub mod auth;
pub mod building;
pub mod config;
pub mod error_convert;
pub mod health;
pub mod listing;
pub mod lookup;
pub mod openapi;
pub mod permits;
pub mod providers;
pub mod resolver;
pub mod rest;
pub mod settings;
pub mod state;
pub mod telemetry;

pub use state::AppState;
