// src/domain/comment.rs

use crate::domain::selection::Identified;
use crate::domain::vehicle::VehicleImage;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthorSummary {
    pub id: i64,
    pub name: String,
    pub photo: Option<String>,
}

/// The vehicle a comment is about, when the backend joined it in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VehicleSummary {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub images: Vec<VehicleImage>,
    pub owner_role_id: i64,
}

/// A renter's review of one of the host's vehicles.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalComment {
    pub id: i64,
    pub vehicle_id: i64,
    pub author_id: i64,
    pub body: String,
    /// Always within `0.0..=5.0`.
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorSummary,
    pub vehicle: Option<VehicleSummary>,
}

impl CanonicalComment {
    /// "brand model", with missing parts rendered as empty strings.
    pub fn vehicle_name(&self) -> String {
        match &self.vehicle {
            Some(v) => format!("{} {}", v.brand, v.model),
            None => " ".to_string(),
        }
    }

    pub fn cover_image(&self) -> Option<&VehicleImage> {
        self.vehicle.as_ref().and_then(|v| v.images.first())
    }
}

impl Identified for CanonicalComment {
    fn id(&self) -> i64 {
        self.id
    }
}
