//! POST /api/bookings - booking intake
//!
//! Payloads are validated against the Booking record kind; the one business
//! rule is that self-drive bookings require a confirmed driver age. Status is
//! stored as supplied (default "new"); there are no server-driven
//! transitions.

use crate::api::AppState;
use crate::error::{ApiError, Result};
use crate::schema::{self, Booking, BookingDriveMode, RecordKind};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
pub struct SubmitBookingResponse {
    pub ok: bool,
    pub id: String,
}

pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<Value>,
) -> Result<impl IntoResponse> {
    let record = schema::validate_payload(RecordKind::Booking, &raw)?;
    let booking: Booking = serde_json::from_value(record.clone())?;

    if requires_age_confirmation(&booking) {
        return Err(ApiError::BadRequest {
            message: "Driver age must be confirmed for self-drive".to_string(),
        });
    }

    let id = state
        .store
        .insert(RecordKind::Booking.collection(), &record)
        .await?;

    info!("Stored booking {} for vehicle {}", id, booking.vehicle_id);

    Ok((StatusCode::OK, Json(SubmitBookingResponse { ok: true, id })))
}

fn requires_age_confirmation(booking: &Booking) -> bool {
    booking.drive_mode == Some(BookingDriveMode::SelfDrive) && !booking.driver_age_confirmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking(drive_mode: Option<&str>, confirmed: bool) -> Booking {
        let mut raw = json!({
            "vehicle_id": "42",
            "first_name": "A",
            "last_name": "B",
            "email": "a@b.com",
            "phone": "123",
            "start_date": "2026-09-01",
            "end_date": "2026-09-03",
            "driver_age_confirmed": confirmed
        });
        if let Some(mode) = drive_mode {
            raw["drive_mode"] = json!(mode);
        }
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_self_drive_without_confirmation_is_rejected() {
        assert!(requires_age_confirmation(&booking(Some("self-drive"), false)));
    }

    #[test]
    fn test_self_drive_with_confirmation_passes() {
        assert!(!requires_age_confirmation(&booking(Some("self-drive"), true)));
    }

    #[test]
    fn test_chauffeur_needs_no_confirmation() {
        assert!(!requires_age_confirmation(&booking(Some("chauffeur"), false)));
        assert!(!requires_age_confirmation(&booking(None, false)));
    }

    #[test]
    fn test_status_defaults_to_new() {
        assert_eq!(
            booking(None, true).status,
            crate::schema::BookingStatus::New
        );
    }
}
