//! Schema Registry
//!
//! Declarative definitions of the seven record kinds backing the site:
//! Vehicle, Booking, Testimonial, Blogpost, Faq, Service, Lead. Each kind maps
//! one-to-one onto a store collection (the lowercase kind name). The registry
//! validates raw payloads into canonical records and describes every kind for
//! the schema-introspection endpoint. Pure functions of input and static
//! definitions; no side effects.

mod describe;
mod records;
mod validate;

pub use records::{
    Blogpost, BlogCategory, Booking, BookingDriveMode, BookingStatus, DriveMode, Faq, FaqCategory,
    Lead, LeadFormType, LeadSource, LeadStatus, Occasion, PreferredContact, Service, Testimonial,
    Vehicle, VehicleType,
};
pub use validate::Validate;

use crate::error::{ApiError, FieldError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Vehicle,
    Booking,
    Testimonial,
    Blogpost,
    Faq,
    Service,
    Lead,
}

impl RecordKind {
    pub const ALL: [RecordKind; 7] = [
        RecordKind::Vehicle,
        RecordKind::Booking,
        RecordKind::Testimonial,
        RecordKind::Blogpost,
        RecordKind::Faq,
        RecordKind::Service,
        RecordKind::Lead,
    ];

    /// Store collection name for this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            RecordKind::Vehicle => "vehicle",
            RecordKind::Booking => "booking",
            RecordKind::Testimonial => "testimonial",
            RecordKind::Blogpost => "blogpost",
            RecordKind::Faq => "faq",
            RecordKind::Service => "service",
            RecordKind::Lead => "lead",
        }
    }

    /// JSON-Schema-like description of this kind.
    pub fn describe(&self) -> Value {
        describe::describe(*self)
    }
}

/// Collection names for every registered kind, in registration order.
pub fn collections() -> Vec<&'static str> {
    RecordKind::ALL.iter().map(|k| k.collection()).collect()
}

/// Shape description for every registered kind, keyed by collection name.
pub fn describe_all() -> Map<String, Value> {
    let mut schemas = Map::new();
    for kind in RecordKind::ALL {
        schemas.insert(kind.collection().to_string(), kind.describe());
    }
    schemas
}

/// Validate a raw payload against a record kind. On success the canonical
/// record is returned with defaults filled in; on failure every offending
/// field is reported.
pub fn validate_payload(kind: RecordKind, raw: &Value) -> Result<Value, ApiError> {
    match kind {
        RecordKind::Vehicle => validate_as::<Vehicle>(raw),
        RecordKind::Booking => validate_as::<Booking>(raw),
        RecordKind::Testimonial => validate_as::<Testimonial>(raw),
        RecordKind::Blogpost => validate_as::<Blogpost>(raw),
        RecordKind::Faq => validate_as::<Faq>(raw),
        RecordKind::Service => validate_as::<Service>(raw),
        RecordKind::Lead => validate_as::<Lead>(raw),
    }
}

fn validate_as<T>(raw: &Value) -> Result<Value, ApiError>
where
    T: DeserializeOwned + Serialize + Validate,
{
    let record: T = serde_json::from_value(raw.clone()).map_err(|e| ApiError::Validation {
        errors: vec![FieldError::new("body", e.to_string())],
    })?;

    record
        .validate()
        .map_err(|errors| ApiError::Validation { errors })?;

    Ok(serde_json::to_value(&record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collections_cover_all_kinds() {
        let names = collections();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"vehicle"));
        assert!(names.contains(&"lead"));
    }

    #[test]
    fn test_validate_payload_fills_defaults() {
        let raw = json!({
            "vehicle_id": "42",
            "first_name": "A",
            "last_name": "B",
            "email": "a@b.com",
            "phone": "123",
            "start_date": "2026-09-01",
            "end_date": "2026-09-03"
        });
        let record = validate_payload(RecordKind::Booking, &raw).unwrap();
        assert_eq!(record["status"], "new");
        assert_eq!(record["preferred_contact"], "whatsapp");
        assert_eq!(record["driver_age_confirmed"], false);
        assert_eq!(record["addons"], json!([]));
    }

    #[test]
    fn test_validate_payload_rejects_unknown_fields() {
        let raw = json!({
            "question": "Is delivery included?",
            "answer": "Yes, within the city.",
            "priority": 1
        });
        let err = validate_payload(RecordKind::Faq, &raw).unwrap_err();
        match err {
            ApiError::Validation { errors } => {
                assert!(errors[0].message.contains("priority"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_payload_rejects_missing_required() {
        let raw = json!({"slug": "weekend-getaway"});
        let err = validate_payload(RecordKind::Service, &raw).unwrap_err();
        match err {
            ApiError::Validation { errors } => {
                assert!(errors[0].message.contains("title"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_payload_reports_range_violations() {
        let raw = json!({
            "slug": "rolls-royce-ghost-2023",
            "year": 2300,
            "make": "Rolls-Royce",
            "model": "Ghost",
            "type": "luxury",
            "price_per_day": 2500.0,
            "mileage_limit_per_day": 100,
            "overage_fee_per_mile": 12.0,
            "security_deposit": 20000
        });
        let err = validate_payload(RecordKind::Vehicle, &raw).unwrap_err();
        match err {
            ApiError::Validation { errors } => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert!(fields.contains(&"year"));
                assert!(fields.contains(&"security_deposit"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_vehicle_drive_mode_defaults_to_both() {
        let raw = json!({
            "slug": "bentley-gt-2022",
            "year": 2022,
            "make": "Bentley",
            "model": "Continental GT",
            "type": "luxury",
            "price_per_day": 1400.0,
            "mileage_limit_per_day": 120,
            "overage_fee_per_mile": 8.0,
            "security_deposit": 4000
        });
        let record = validate_payload(RecordKind::Vehicle, &raw).unwrap();
        assert_eq!(record["drive_mode"], "both");
        assert_eq!(record["available"], true);
    }

    #[test]
    fn test_lead_payload_preserves_key_order() {
        let raw = json!({
            "payload": {"vehicle_slug": "x", "occasion": "wedding", "addons": ["chauffeur"]}
        });
        let record = validate_payload(RecordKind::Lead, &raw).unwrap();
        assert_eq!(record["source"], "web");
        assert_eq!(record["form_type"], "quote");
        let keys: Vec<&str> = record["payload"]
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, ["vehicle_slug", "occasion", "addons"]);
    }

    #[test]
    fn test_describe_all_keyed_by_collection() {
        let schemas = describe_all();
        assert_eq!(schemas.len(), 7);
        assert_eq!(schemas["vehicle"]["title"], "Vehicle");
        assert_eq!(schemas["lead"]["title"], "Lead");
    }
}
