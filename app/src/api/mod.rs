pub mod types;
pub mod vote;

use axum::http::{header, HeaderValue};
use axum::{routing::get, Json, Router};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;
use types::{ActionRule, ActionsJson};

pub const ACTION_PATH: &str = "/api/vote";

pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const MAX_AGE: &str = "86400";

/// Build the complete API router with all sub-routes.
///
/// Every response, including errors, carries the actions CORS headers for
/// `allowed_origin`.
pub fn api_router(allowed_origin: HeaderValue) -> Router<AppState> {
    Router::new()
        .nest(ACTION_PATH, vote::router())
        .route("/actions.json", get(actions_json))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            allowed_origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static(MAX_AGE),
        ))
}

/// Maps site paths to action API paths so blink clients can discover them.
async fn actions_json() -> Json<ActionsJson> {
    let pattern = format!("{}**", ACTION_PATH);
    Json(ActionsJson {
        rules: vec![ActionRule {
            path_pattern: pattern.clone(),
            api_path: pattern,
        }],
    })
}
