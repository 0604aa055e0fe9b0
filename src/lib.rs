pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the application router.
///
/// Protected routes sit behind the bearer token gate; anything unmatched,
/// including an unsupported method on a known path, is a JSON 404.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .merge(public_routes())
        // Protected API
        .merge(protected_routes(state.clone()))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn public_routes() -> Router<AppState> {
    use handlers::{not_found, public};

    Router::new()
        .route("/", get(public::root).fallback(not_found))
        .route("/health", get(public::health).fallback(not_found))
        .route("/register", post(public::register).fallback(not_found))
        .route("/login", post(public::login).fallback(not_found))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use handlers::{not_found, protected};

    Router::new()
        .route("/users", get(protected::list_users).fallback(not_found))
        .route("/users/:id", get(protected::get_user).fallback(not_found))
        .route(
            "/users/filter/:age",
            get(protected::filter_users_by_age).fallback(not_found),
        )
        .route("/update/:id", patch(protected::update_user).fallback(not_found))
        .route_layer(from_fn_with_state(state, middleware::require_bearer))
}
