pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod normalization;
pub mod quiz;
pub mod router;
pub mod state;
pub mod stats;
pub mod tracing;
pub mod vocab;

pub use config::ApiConfig;
pub use state::{ApiState, AuthConfig};
