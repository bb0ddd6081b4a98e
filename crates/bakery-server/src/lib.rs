pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> Router {
    let app_state = state::AppState::new(root);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Paged grid
        .route("/api/orders", get(routes::orders::list_orders))
        .route("/api/orders", post(routes::orders::create_order))
        .route("/api/orders/count", get(routes::orders::count_orders))
        .route("/api/orders/{id}", get(routes::orders::get_order))
        .route("/api/orders/{id}", put(routes::orders::update_order))
        // Bucketed storefront view
        .route(
            "/api/storefront",
            get(routes::storefront::storefront_groups),
        )
        .layer(cors)
        .with_state(app_state)
}

/// Start the storefront API server.
pub async fn serve(root: PathBuf, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(root, listener, open_browser).await
}

/// Start the storefront API server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0`
/// and the OS picks a free port).
pub async fn serve_on(
    root: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root);

    tracing::info!("bakery API listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}/api/orders");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
