use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use wk_api::{ApiConfig, ApiState, middleware::cors, tracing::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    init_tracing(&config.env);

    let pool = wk_db::create_pool(&config.database_url, 10).await?;
    wk_db::ensure_db_and_migrate(&config.database_url, &pool).await?;

    let cors = cors::create_cors_layer(vec![config.frontend_url.clone()]);
    let port = config.port;
    let state = ApiState::new(config, pool);

    let app = wk_api::router::router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Server listening on http://localhost:{port}");

    // ConnectInfo feeds the per-IP rate limiter's key extractor
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
