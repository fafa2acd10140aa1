use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod config;
mod models;
mod routes;
mod services;

use adapters::PgQueryLog;
use config::Config;
use services::image_search::ImageSearchClient;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub search: ImageSearchClient,
    pub query_log: Option<PgQueryLog>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "snapquery is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🔍 snapquery initializing...");

    let Config {
        port,
        search_cx,
        search_key,
        database_url,
    } = Config::from_env().context("Failed to load configuration")?;

    // Query log is optional: without a database the service runs search-only.
    let query_log = match database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .connect(&url)
                .await
                .context("Failed to connect to Postgres")?;

            sqlx::migrate!()
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            tracing::info!("✅ Query log connected, migrations completed");
            Some(PgQueryLog::new(pool))
        }
        None => {
            tracing::warn!("⚠️  No DATABASE_URL set - query log disabled");
            None
        }
    };

    let state = AppState {
        search: ImageSearchClient::new(search_cx, search_key),
        query_log,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::search::router())
        .merge(routes::latest::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ snapquery listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
