//! GET /schema - schema introspection
//!
//! Machine-readable shape description for every registered record kind.

use crate::schema;
use axum::Json;
use serde_json::{Map, Value};

pub async fn schema_index() -> Json<Map<String, Value>> {
    Json(schema::describe_all())
}
