//! Red Wine Analyzer quickstart for Vinalyze
//!
//! Serves the single-page form and forwards validated submissions to the
//! configured external prediction service.
//!
//! Run with: cargo run -p wine-analyzer
//! Then open: http://localhost:8080

use std::net::SocketAddr;
use std::sync::Arc;

use owo_colors::OwoColorize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use vinalyze::ClientConfig;

use wine_analyzer::{api, console};

#[tokio::main]
async fn main() {
    console::init();

    // File config with deployment-time env overrides on top.
    let config = ClientConfig::load("vinalyze.toml")
        .unwrap_or_default()
        .with_env_overrides();
    if let Err(error) = config.validate() {
        eprintln!("{} {}", "✗".bright_red(), error);
        std::process::exit(1);
    }
    console::print_endpoint_status(config.endpoint());

    // Create shared application state
    let state = Arc::new(api::AppState::new(&config));

    // CORS for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = api::router(state)
        .fallback_service(ServeDir::new("static"))
        .layer(cors);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    println!(
        "{} Server listening on {}",
        "▸".bright_green(),
        format!("http://{}", addr).bright_cyan().underline()
    );
    println!(
        "{} Open {} in your browser\n",
        "▸".bright_green(),
        "http://localhost:8080".bright_cyan().underline()
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
