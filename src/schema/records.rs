//! Typed record definitions for the seven collection kinds.
//!
//! Field sets, enumerations, and defaults are the contract of the backing
//! collections; unknown fields are rejected at the edge. Range and URL checks
//! live in the per-kind `Validate` implementations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// === Vehicle ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Supercar,
    Suv,
    Luxury,
    Sedan,
    Convertible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriveMode {
    SelfDrive,
    Chauffeur,
    Both,
}

impl Default for DriveMode {
    fn default() -> Self {
        DriveMode::Both
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vehicle {
    /// Unique slug: brand-model-year-trim. Uniqueness is by convention only.
    pub slug: String,
    pub year: i64,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub trim: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    #[serde(default)]
    pub drive_mode: DriveMode,
    pub price_per_day: f64,
    #[serde(default)]
    pub price_per_week: Option<f64>,
    pub mileage_limit_per_day: i64,
    pub overage_fee_per_mile: f64,
    pub security_deposit: i64,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub drivetrain: Option<String>,
    #[serde(default)]
    pub seats: Option<i64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub horsepower: Option<i64>,
    #[serde(default)]
    pub torque: Option<i64>,
    #[serde(default)]
    pub zero_to_60: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    /// e.g. nightlife, wedding
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub availability_notes: Option<String>,
}

fn default_true() -> bool {
    true
}

// === Booking ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    Whatsapp,
    Phone,
    Email,
}

impl Default for PreferredContact {
    fn default() -> Self {
        PreferredContact::Whatsapp
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Nightlife,
    Wedding,
    Corporate,
    Weekend,
    Other,
}

/// Drive mode as submitted on a booking; `both` is a catalog value only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingDriveMode {
    SelfDrive,
    Chauffeur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    New,
    Reviewing,
    Approved,
    Declined,
    Canceled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::New
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Booking {
    /// Reference to a vehicle identifier in its string form.
    pub vehicle_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub preferred_contact: PreferredContact,
    /// ISO date; no range validation is applied.
    pub start_date: String,
    /// ISO date; no range validation is applied.
    pub end_date: String,
    #[serde(default)]
    pub delivery_location: Option<String>,
    #[serde(default)]
    pub occasion: Option<Occasion>,
    #[serde(default)]
    pub driver_age_confirmed: bool,
    #[serde(default)]
    pub license_upload_url: Option<String>,
    #[serde(default)]
    pub insurance_upload_url: Option<String>,
    #[serde(default)]
    pub selfie_upload_url: Option<String>,
    #[serde(default)]
    pub drive_mode: Option<BookingDriveMode>,
    #[serde(default)]
    pub addons: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
}

// === Testimonial ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub author_name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub quote: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

// === Blogpost ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogCategory {
    Nightlife,
    Corporate,
    Weekenders,
    Spotlight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Blogpost {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    pub body: String,
    pub category: BlogCategory,
    #[serde(default)]
    pub author: Option<String>,
    /// ISO datetime
    #[serde(default)]
    pub published_at: Option<String>,
}

// === Faq ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    Policy,
    Booking,
    Vehicles,
    Services,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Faq {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<FaqCategory>,
    #[serde(default)]
    pub order: Option<i64>,
}

// === Service ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

// === Lead ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    Web,
    Whatsapp,
    Phone,
}

impl Default for LeadSource {
    fn default() -> Self {
        LeadSource::Web
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadFormType {
    Quote,
    Contact,
    Newsletter,
}

impl Default for LeadFormType {
    fn default() -> Self {
        LeadFormType::Quote
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Closed,
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lead {
    #[serde(default)]
    pub source: LeadSource,
    #[serde(default)]
    pub form_type: LeadFormType,
    /// Free-form quote details; insertion order is preserved.
    #[serde(default)]
    pub payload: Map<String, Value>,
    #[serde(default)]
    pub status: LeadStatus,
}
