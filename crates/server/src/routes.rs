//! HTTP routes.
//!
//! ## Endpoints
//!
//! - `GET /` - HTML viewer
//! - `GET /api/names?font=<key>` - All names plus font metadata
//! - `GET /api/names/all` - All names as a bare array
//! - `GET /api/names/fonts` - The font table
//! - `GET /health` - Liveness and version

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::Method,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::ApiError;
use crate::fonts::FontTable;
use crate::lookup::{HealthStatus, NameLookup};
use crate::page::INDEX_HTML;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<NameLookup>,
}

impl AppState {
    pub fn new(lookup: NameLookup) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

#[derive(Serialize)]
struct FontsResponse<'a> {
    fonts: &'a FontTable,
}

/// Build the router over a constructed lookup service
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/names", get(list_names))
        .route("/api/names/all", get(all_names))
        .route("/api/names/fonts", get(list_fonts))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
        .with_state(state)
}

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// The `font` query value; the last one wins when the key repeats
fn requested_font(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .rev()
        .find(|(key, _)| key == "font")
        .map(|(_, value)| value.as_str())
}

/// GET /api/names
///
/// Records serialize straight from the shared dataset; nothing is cloned.
/// The query is read as raw pairs so that no shape of `font` can fail
/// extraction ahead of the lookup.
async fn list_names(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let body = state.lookup.names_with_font(requested_font(&params))?;
    Ok(Json(body).into_response())
}

/// GET /api/names/all
async fn all_names(State(state): State<AppState>) -> Result<Response, ApiError> {
    let names = state.lookup.all_names()?;
    Ok(Json(names).into_response())
}

/// GET /api/names/fonts
async fn list_fonts(State(state): State<AppState>) -> Response {
    Json(FontsResponse {
        fonts: state.lookup.fonts(),
    })
    .into_response()
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.lookup.health())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_requested_font_last_wins() {
        let params = pairs(&[("font", "lateef"), ("x", "1"), ("font", "amiri")]);
        assert_eq!(requested_font(&params), Some("amiri"));
    }

    #[test]
    fn test_requested_font_absent_or_empty() {
        assert_eq!(requested_font(&pairs(&[("other", "lateef")])), None);
        assert_eq!(requested_font(&pairs(&[("font", "")])), Some(""));
    }
}
