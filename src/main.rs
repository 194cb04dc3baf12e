use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use storefront::config::AppConfig;
use storefront::db::{self, SqliteKv};
use storefront::handlers;
use storefront::services::ai::groq::GroqProvider;
use storefront::services::ai::ollama::OllamaProvider;
use storefront::services::ai::LlmProvider;
use storefront::state::AppState;
use storefront::store::DataAccess;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    let kv = Arc::new(SqliteKv::new(Arc::new(Mutex::new(conn))));
    let data = DataAccess::new(kv, Duration::from_millis(config.simulated_latency_ms))?;

    let llm: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
        "groq" => {
            anyhow::ensure!(!config.groq_api_key.is_empty(), "GROQ_API_KEY must be set when LLM_PROVIDER=groq");
            tracing::info!("using Groq LLM provider (model: {})", config.groq_model);
            Box::new(GroqProvider::new(config.groq_api_key.clone(), config.groq_model.clone()))
        }
        _ => {
            tracing::info!("using Ollama LLM provider (url: {})", config.ollama_url);
            Box::new(OllamaProvider::new(config.ollama_url.clone(), config.ollama_model.clone()))
        }
    };

    let state = Arc::new(AppState {
        data: Arc::new(data),
        config: config.clone(),
        llm,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::public::list_services))
        .route("/api/bookings", post(handlers::public::create_booking))
        .route("/api/menu-suggestions", post(handlers::public::menu_suggestions))
        .route("/api/translations/:lang", get(handlers::public::translations))
        .route(
            "/api/translations/:lang/:key",
            get(handlers::public::translation),
        )
        .route("/api/admin/login", post(handlers::admin::login))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route("/api/admin/bookings/:id", get(handlers::admin::get_booking))
        .route(
            "/api/admin/bookings/:id/status",
            post(handlers::admin::update_booking_status),
        )
        .route("/api/admin/services", get(handlers::admin::get_services))
        .route(
            "/api/admin/services/:id",
            put(handlers::admin::update_service),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
