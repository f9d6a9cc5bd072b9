//! Per-kind validation.
//!
//! Structural checks (types, required fields, unknown fields) happen during
//! deserialization; the `Validate` implementations here cover numeric ranges
//! and URL-shaped fields, collecting every offending field.

use crate::error::FieldError;
use crate::schema::records::{
    Blogpost, Booking, Faq, Lead, Service, Testimonial, Vehicle,
};

/// Range and format checks over an already-deserialized record. Returns every
/// offending field, not just the first.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_range(errors: &mut Vec<FieldError>, field: &str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
        errors.push(FieldError::new(
            field,
            format!("must be between {} and {}", min, max),
        ));
    }
}

fn check_min_i64(errors: &mut Vec<FieldError>, field: &str, value: i64, min: i64) {
    if value < min {
        errors.push(FieldError::new(field, format!("must be at least {}", min)));
    }
}

fn check_min_f64(errors: &mut Vec<FieldError>, field: &str, value: f64, min: f64) {
    if value < min {
        errors.push(FieldError::new(field, format!("must be at least {}", min)));
    }
}

fn check_url(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if !value.starts_with("http://") && !value.starts_with("https://") {
        errors.push(FieldError::new(field, "must be an http(s) URL"));
    }
}

impl Validate for Vehicle {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        check_range(&mut errors, "year", self.year, 1900, 2100);
        check_min_f64(&mut errors, "price_per_day", self.price_per_day, 0.0);
        if let Some(price) = self.price_per_week {
            check_min_f64(&mut errors, "price_per_week", price, 0.0);
        }
        check_min_i64(
            &mut errors,
            "mileage_limit_per_day",
            self.mileage_limit_per_day,
            0,
        );
        check_min_f64(
            &mut errors,
            "overage_fee_per_mile",
            self.overage_fee_per_mile,
            0.0,
        );
        check_range(&mut errors, "security_deposit", self.security_deposit, 0, 10000);
        if let Some(seats) = self.seats {
            check_range(&mut errors, "seats", seats, 1, 9);
        }
        if let Some(horsepower) = self.horsepower {
            check_min_i64(&mut errors, "horsepower", horsepower, 0);
        }
        if let Some(torque) = self.torque {
            check_min_i64(&mut errors, "torque", torque, 0);
        }
        if let Some(zero_to_60) = self.zero_to_60 {
            check_min_f64(&mut errors, "zero_to_60", zero_to_60, 0.0);
        }
        for (i, image) in self.images.iter().enumerate() {
            check_url(&mut errors, &format!("images[{}]", i), image);
        }
        if let Some(url) = &self.video_url {
            check_url(&mut errors, "video_url", url);
        }

        finish(errors)
    }
}

impl Validate for Booking {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(url) = &self.license_upload_url {
            check_url(&mut errors, "license_upload_url", url);
        }
        if let Some(url) = &self.insurance_upload_url {
            check_url(&mut errors, "insurance_upload_url", url);
        }
        if let Some(url) = &self.selfie_upload_url {
            check_url(&mut errors, "selfie_upload_url", url);
        }

        finish(errors)
    }
}

impl Validate for Testimonial {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(rating) = self.rating {
            check_range(&mut errors, "rating", rating, 1, 5);
        }
        if let Some(url) = &self.image_url {
            check_url(&mut errors, "image_url", url);
        }

        finish(errors)
    }
}

impl Validate for Blogpost {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(url) = &self.cover_image_url {
            check_url(&mut errors, "cover_image_url", url);
        }

        finish(errors)
    }
}

impl Validate for Faq {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Ok(())
    }
}

impl Validate for Service {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(url) = &self.hero_image_url {
            check_url(&mut errors, "hero_image_url", url);
        }

        finish(errors)
    }
}

impl Validate for Lead {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        // The payload is opaque by design; enums are checked structurally.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::records::{DriveMode, VehicleType};

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            slug: "ferrari-488-2020".to_string(),
            year: 2020,
            make: "Ferrari".to_string(),
            model: "488".to_string(),
            trim: None,
            vehicle_type: VehicleType::Supercar,
            drive_mode: DriveMode::Both,
            price_per_day: 1800.0,
            price_per_week: Some(10500.0),
            mileage_limit_per_day: 100,
            overage_fee_per_mile: 9.5,
            security_deposit: 5000,
            transmission: None,
            drivetrain: None,
            seats: Some(2),
            color: None,
            horsepower: Some(661),
            torque: None,
            zero_to_60: Some(3.0),
            features: vec![],
            images: vec!["https://cdn.example.com/488.jpg".to_string()],
            video_url: None,
            tags: vec![],
            available: true,
            availability_notes: None,
        }
    }

    #[test]
    fn test_valid_vehicle_passes() {
        assert!(sample_vehicle().validate().is_ok());
    }

    #[test]
    fn test_year_out_of_range() {
        let mut vehicle = sample_vehicle();
        vehicle.year = 1899;
        let errors = vehicle.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "year");

        vehicle.year = 2101;
        assert!(vehicle.validate().is_err());
    }

    #[test]
    fn test_security_deposit_bounds() {
        let mut vehicle = sample_vehicle();
        vehicle.security_deposit = 10001;
        let errors = vehicle.validate().unwrap_err();
        assert_eq!(errors[0].field, "security_deposit");

        vehicle.security_deposit = 10000;
        assert!(vehicle.validate().is_ok());
    }

    #[test]
    fn test_all_offending_fields_are_reported() {
        let mut vehicle = sample_vehicle();
        vehicle.year = 1800;
        vehicle.seats = Some(10);
        vehicle.price_per_day = -1.0;
        let errors = vehicle.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"year"));
        assert!(fields.contains(&"seats"));
        assert!(fields.contains(&"price_per_day"));
    }

    #[test]
    fn test_image_url_shape() {
        let mut vehicle = sample_vehicle();
        vehicle.images = vec!["ftp://bad".to_string()];
        let errors = vehicle.validate().unwrap_err();
        assert_eq!(errors[0].field, "images[0]");
    }

    #[test]
    fn test_testimonial_rating_bounds() {
        let testimonial = Testimonial {
            author_name: "A. Client".to_string(),
            location: None,
            quote: "Unforgettable weekend.".to_string(),
            rating: Some(6),
            image_url: None,
        };
        let errors = testimonial.validate().unwrap_err();
        assert_eq!(errors[0].field, "rating");

        let ok = Testimonial {
            rating: Some(5),
            ..testimonial
        };
        assert!(ok.validate().is_ok());
    }
}
