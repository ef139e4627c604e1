//! Tracing setup: pretty logs in development, JSON logs in production.
//!
//! `RUST_LOG` overrides the default filter in either mode
//! (e.g. `RUST_LOG=debug,tower_http=trace`).

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

pub fn init_tracing(env: &Environment) {
    if env.is_development() {
        init_development_tracing();
    } else {
        init_production_tracing();
    }
}

fn init_development_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug,tower_http=debug,sqlx=warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .pretty()
                .with_filter(env_filter),
        )
        .init();

    tracing::info!("Tracing initialized in development mode");
}

fn init_production_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .flatten_event(true)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();

    tracing::info!("Tracing initialized in production mode");
}
