//! Machine-readable shape descriptions for the schema-introspection endpoint.
//!
//! Hand-written JSON-Schema-like objects, kept in lockstep with the typed
//! records in `records.rs`.

use crate::schema::RecordKind;
use serde_json::{json, Value};

pub(super) fn describe(kind: RecordKind) -> Value {
    match kind {
        RecordKind::Vehicle => vehicle(),
        RecordKind::Booking => booking(),
        RecordKind::Testimonial => testimonial(),
        RecordKind::Blogpost => blogpost(),
        RecordKind::Faq => faq(),
        RecordKind::Service => service(),
        RecordKind::Lead => lead(),
    }
}

fn string_list() -> Value {
    json!({"type": "array", "items": {"type": "string"}, "default": []})
}

fn url() -> Value {
    json!({"type": "string", "format": "url"})
}

fn vehicle() -> Value {
    json!({
        "title": "Vehicle",
        "type": "object",
        "required": [
            "slug", "year", "make", "model", "type", "price_per_day",
            "mileage_limit_per_day", "overage_fee_per_mile", "security_deposit"
        ],
        "properties": {
            "slug": {"type": "string", "description": "Unique slug: brand-model-year-trim"},
            "year": {"type": "integer", "minimum": 1900, "maximum": 2100},
            "make": {"type": "string"},
            "model": {"type": "string"},
            "trim": {"type": "string"},
            "type": {"type": "string", "enum": ["supercar", "suv", "luxury", "sedan", "convertible"]},
            "drive_mode": {"type": "string", "enum": ["self-drive", "chauffeur", "both"], "default": "both"},
            "price_per_day": {"type": "number", "minimum": 0},
            "price_per_week": {"type": "number", "minimum": 0},
            "mileage_limit_per_day": {"type": "integer", "minimum": 0},
            "overage_fee_per_mile": {"type": "number", "minimum": 0},
            "security_deposit": {"type": "integer", "minimum": 0, "maximum": 10000},
            "transmission": {"type": "string"},
            "drivetrain": {"type": "string"},
            "seats": {"type": "integer", "minimum": 1, "maximum": 9},
            "color": {"type": "string"},
            "horsepower": {"type": "integer", "minimum": 0},
            "torque": {"type": "integer", "minimum": 0},
            "zero_to_60": {"type": "number", "minimum": 0},
            "features": string_list(),
            "images": {"type": "array", "items": url(), "default": []},
            "video_url": url(),
            "tags": string_list(),
            "available": {"type": "boolean", "default": true},
            "availability_notes": {"type": "string"}
        },
        "additionalProperties": false
    })
}

fn booking() -> Value {
    json!({
        "title": "Booking",
        "type": "object",
        "required": [
            "vehicle_id", "first_name", "last_name", "email", "phone",
            "start_date", "end_date"
        ],
        "properties": {
            "vehicle_id": {"type": "string", "description": "Reference to a vehicle identifier as a string"},
            "first_name": {"type": "string"},
            "last_name": {"type": "string"},
            "email": {"type": "string"},
            "phone": {"type": "string"},
            "preferred_contact": {"type": "string", "enum": ["whatsapp", "phone", "email"], "default": "whatsapp"},
            "start_date": {"type": "string", "format": "date"},
            "end_date": {"type": "string", "format": "date"},
            "delivery_location": {"type": "string"},
            "occasion": {"type": "string", "enum": ["nightlife", "wedding", "corporate", "weekend", "other"]},
            "driver_age_confirmed": {"type": "boolean", "default": false},
            "license_upload_url": url(),
            "insurance_upload_url": url(),
            "selfie_upload_url": url(),
            "drive_mode": {"type": "string", "enum": ["self-drive", "chauffeur"]},
            "addons": string_list(),
            "notes": {"type": "string"},
            "status": {"type": "string", "enum": ["new", "reviewing", "approved", "declined", "canceled"], "default": "new"}
        },
        "additionalProperties": false
    })
}

fn testimonial() -> Value {
    json!({
        "title": "Testimonial",
        "type": "object",
        "required": ["author_name", "quote"],
        "properties": {
            "author_name": {"type": "string"},
            "location": {"type": "string"},
            "quote": {"type": "string"},
            "rating": {"type": "integer", "minimum": 1, "maximum": 5},
            "image_url": url()
        },
        "additionalProperties": false
    })
}

fn blogpost() -> Value {
    json!({
        "title": "Blogpost",
        "type": "object",
        "required": ["slug", "title", "body", "category"],
        "properties": {
            "slug": {"type": "string"},
            "title": {"type": "string"},
            "excerpt": {"type": "string"},
            "cover_image_url": url(),
            "body": {"type": "string"},
            "category": {"type": "string", "enum": ["nightlife", "corporate", "weekenders", "spotlight"]},
            "author": {"type": "string"},
            "published_at": {"type": "string", "format": "date-time"}
        },
        "additionalProperties": false
    })
}

fn faq() -> Value {
    json!({
        "title": "Faq",
        "type": "object",
        "required": ["question", "answer"],
        "properties": {
            "question": {"type": "string"},
            "answer": {"type": "string"},
            "category": {"type": "string", "enum": ["policy", "booking", "vehicles", "services"]},
            "order": {"type": "integer"}
        },
        "additionalProperties": false
    })
}

fn service() -> Value {
    json!({
        "title": "Service",
        "type": "object",
        "required": ["slug", "title"],
        "properties": {
            "slug": {"type": "string"},
            "title": {"type": "string"},
            "summary": {"type": "string"},
            "body": {"type": "string"},
            "hero_image_url": url(),
            "highlights": string_list()
        },
        "additionalProperties": false
    })
}

fn lead() -> Value {
    json!({
        "title": "Lead",
        "type": "object",
        "required": [],
        "properties": {
            "source": {"type": "string", "enum": ["web", "whatsapp", "phone"], "default": "web"},
            "form_type": {"type": "string", "enum": ["quote", "contact", "newsletter"], "default": "quote"},
            "payload": {"type": "object", "default": {}},
            "status": {"type": "string", "enum": ["new", "contacted", "qualified", "closed"], "default": "new"}
        },
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_describes_an_object() {
        for kind in RecordKind::ALL {
            let schema = describe(kind);
            assert_eq!(schema["type"], "object", "{:?}", kind);
            assert!(schema["properties"].is_object(), "{:?}", kind);
            assert!(schema["required"].is_array(), "{:?}", kind);
        }
    }

    #[test]
    fn test_vehicle_required_fields() {
        let schema = describe(RecordKind::Vehicle);
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"slug"));
        assert!(required.contains(&"security_deposit"));
        assert!(!required.contains(&"seats"));
    }

    #[test]
    fn test_booking_status_enum_and_default() {
        let schema = describe(RecordKind::Booking);
        let status = &schema["properties"]["status"];
        assert_eq!(status["default"], "new");
        assert_eq!(status["enum"].as_array().unwrap().len(), 5);
    }
}
