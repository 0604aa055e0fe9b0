use axum::response::Json;

pub const WELCOME: &str = "Welcome To User App";

/// GET / - welcome text
pub async fn root() -> Json<&'static str> {
    Json(WELCOME)
}
