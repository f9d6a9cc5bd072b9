//! Public vehicle catalog endpoints.
//!
//! - GET /api/vehicles - list, with optional make/type/drive_mode filters
//! - GET /api/vehicles/{slug} - single vehicle by slug

use crate::api::AppState;
use crate::error::{ApiError, Result};
use crate::schema::RecordKind;
use crate::store::Filter;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub make: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub drive_mode: Option<String>,
}

pub async fn list_vehicles(
    State(state): State<Arc<AppState>>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<Value>>> {
    let mut filter = Filter::new();
    if let Some(make) = &filters.make {
        // Full-string match, ignoring case; no partial matching
        filter = filter.eq_ignore_case("make", make);
    }
    if let Some(vehicle_type) = &filters.vehicle_type {
        filter = filter.eq("type", vehicle_type);
    }
    if let Some(drive_mode) = &filters.drive_mode {
        filter = filter.eq("drive_mode", drive_mode);
    }

    let documents = state
        .store
        .find(RecordKind::Vehicle.collection(), &filter, None)
        .await?;

    debug!(
        "Vehicle listing matched {} records with {} filters",
        documents.len(),
        filter.len()
    );

    Ok(Json(documents.into_iter().map(|d| d.doc).collect()))
}

pub async fn get_vehicle(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Value>> {
    let filter = Filter::new().eq("slug", &slug);

    let documents = state
        .store
        .find(RecordKind::Vehicle.collection(), &filter, Some(1))
        .await?;

    match documents.into_iter().next() {
        Some(document) => Ok(Json(document.doc)),
        None => Err(ApiError::NotFound {
            what: "Vehicle".to_string(),
        }),
    }
}
