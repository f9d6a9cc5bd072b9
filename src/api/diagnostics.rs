//! GET /test - store diagnostics
//!
//! Never fails: every store error is degraded into a descriptive string in a
//! 200 response so the endpoint stays usable as a health-check surface.

use crate::api::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

const MAX_COLLECTIONS: usize = 10;
const MAX_CAUSE_LEN: usize = 80;

#[derive(Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub async fn diagnostics(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "available".to_string(),
        database_url: Some(
            if state.database_url_from_env {
                "set"
            } else {
                "not set"
            }
            .to_string(),
        ),
        database_name: Some(state.database_name.clone()),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    match state.store.ping().await {
        Ok(()) => match state.store.list_collections().await {
            Ok(collections) => {
                response.collections = collections.into_iter().take(MAX_COLLECTIONS).collect();
                response.database = "connected".to_string();
                response.connection_status = "connected".to_string();
            }
            Err(e) => {
                warn!("Diagnostics: collection listing failed: {}", e);
                response.database =
                    format!("connected but error: {}", truncate(&e.to_string(), MAX_CAUSE_LEN));
            }
        },
        Err(e) => {
            warn!("Diagnostics: store unreachable: {}", e);
            response.database = format!("error: {}", truncate(&e.to_string(), MAX_CAUSE_LEN));
        }
    }

    Json(response)
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_clamps_long_strings() {
        let long = "x".repeat(200);
        assert_eq!(truncate(&long, MAX_CAUSE_LEN).len(), 80);
        assert_eq!(truncate("short", MAX_CAUSE_LEN), "short");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let s = "é".repeat(100);
        assert_eq!(truncate(&s, 80).chars().count(), 80);
    }
}
