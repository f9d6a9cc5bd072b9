use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    message: String,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Black Label Luxury Rentals API running".to_string(),
    })
}
