//! POST /api/lead - quote lead intake
//!
//! The caller submits contact fields plus a free-form quote payload; the
//! handler folds the contact block and a server-side UTC timestamp into the
//! payload and stores a Lead with source "web" and form type "quote".

use crate::api::AppState;
use crate::error::Result;
use crate::schema::{Lead, LeadFormType, LeadSource, LeadStatus, RecordKind};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct QuotePayload {
    pub vehicle_slug: Option<String>,
    pub vehicle_id: Option<String>,
    pub drive_mode: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub delivery_location: Option<String>,
    pub occasion: Option<String>,
    pub addons: Option<Vec<String>>,
    pub utm: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default = "default_preferred_contact")]
    pub preferred_contact: String,
    pub payload: QuotePayload,
}

fn default_preferred_contact() -> String {
    "whatsapp".to_string()
}

#[derive(Serialize)]
pub struct CreateLeadResponse {
    pub ok: bool,
    pub id: String,
}

pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QuoteRequest>,
) -> Result<impl IntoResponse> {
    let mut payload = match serde_json::to_value(&request.payload)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    payload.insert(
        "contact".to_string(),
        json!({
            "first_name": request.first_name,
            "last_name": request.last_name,
            "email": request.email,
            "phone": request.phone,
            "preferred_contact": request.preferred_contact,
        }),
    );
    payload.insert("received_at".to_string(), json!(Utc::now().to_rfc3339()));

    let lead = Lead {
        source: LeadSource::Web,
        form_type: LeadFormType::Quote,
        payload,
        status: LeadStatus::New,
    };

    let doc = serde_json::to_value(&lead)?;
    let id = state
        .store
        .insert(RecordKind::Lead.collection(), &doc)
        .await?;

    info!("Stored quote lead {}", id);

    Ok((StatusCode::OK, Json(CreateLeadResponse { ok: true, id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_payload_serializes_every_field() {
        // Absent optional fields still appear as nulls in the stored payload.
        let payload: QuotePayload = serde_json::from_value(json!({
            "vehicle_slug": "ferrari-488-2020"
        }))
        .unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map["vehicle_slug"], "ferrari-488-2020");
        assert!(map.contains_key("utm"));
        assert_eq!(map["utm"], Value::Null);
        assert_eq!(map.len(), 9);
    }

    #[test]
    fn test_quote_request_defaults_preferred_contact() {
        let request: QuoteRequest = serde_json::from_value(json!({
            "first_name": "A",
            "last_name": "B",
            "email": "a@b.com",
            "phone": "123",
            "payload": {"vehicle_slug": "x"}
        }))
        .unwrap();
        assert_eq!(request.preferred_contact, "whatsapp");
    }
}
