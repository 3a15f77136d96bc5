pub mod error;
pub mod pages;
pub mod routes;
pub mod state;
pub mod ticker;

use axum::routing::{get, post};
use axum::Router;
use eato_core::Site;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf, site: Arc<Site>) -> Router {
    router(state::AppState::new(root, site))
}

fn router(app_state: state::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let images = app_state
        .root
        .join(&app_state.site.config().assets.public_dir)
        .join("images");

    Router::new()
        // Site content
        .route("/api/site", get(routes::site::get_site))
        .route("/api/catalog", get(routes::catalog::list_systems))
        .route("/api/catalog/{slug}", get(routes::catalog::get_system))
        .route("/api/schedule", get(routes::roadmap::get_schedule))
        .route("/api/timeline", get(routes::roadmap::get_timeline))
        // Styles
        .route("/api/layers", get(routes::layers::list_layers))
        .route(
            "/api/layers/{layer}/style",
            get(routes::layers::get_layer_style),
        )
        // Carousels
        .route("/api/carousels", get(routes::carousels::list_carousels))
        .route(
            "/api/carousels/{slug}",
            get(routes::carousels::get_carousel),
        )
        // Page instances
        .route("/api/pages", post(routes::pages::create_page))
        .route(
            "/api/pages/{id}",
            get(routes::pages::get_page).delete(routes::pages::close_page),
        )
        .route("/api/pages/{id}/mount", post(routes::pages::mount_page))
        .route("/api/pages/{id}/toggle", post(routes::pages::toggle_card))
        .route("/api/pages/{id}/select", post(routes::pages::select_step))
        .route("/api/pages/{id}/tab", post(routes::pages::set_tab))
        .route("/api/pages/{id}/events", get(routes::events::page_events))
        // Assets
        .route("/placeholder.svg", get(routes::placeholder::placeholder))
        .nest_service("/images", ServeDir::new(images))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the roadmap server on `port`.
pub async fn serve(root: PathBuf, site: Site, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(root, site, listener, open_browser).await
}

/// Start the roadmap server on a pre-bound listener.
///
/// Accepting a bound `TcpListener` lets the caller read the actual port
/// first (useful when `port = 0` and the OS picks a free port).
pub async fn serve_on(
    root: PathBuf,
    site: Site,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app_state = state::AppState::new(root, Arc::new(site));
    let app = router(app_state.clone());

    tracing::info!("EatoSystems roadmap listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}/api/timeline");
        if let Err(e) = open::that(&url) {
            tracing::warn!(error = %e, "could not open browser");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let closed = app_state.close_all().await;
    tracing::info!(closed, "server stopped; page timers cancelled");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
