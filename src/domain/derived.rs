// src/domain/derived.rs

use crate::domain::vehicle::CanonicalVehicle;

pub const MAX_STARS: u8 = 5;

/// How a rating is drawn as a row of five stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Expects `rating` in `0.0..=5.0`; callers clamp first.
    pub fn from_rating(rating: f64) -> Self {
        let full = rating.floor() as u8;
        let half = rating.rem_euclid(1.0) >= 0.5;
        let empty = MAX_STARS
            .saturating_sub(full)
            .saturating_sub(u8::from(half));

        Self { full, half, empty }
    }
}

/// Totals shown at the top of the vehicle dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VehicleStats {
    pub total: usize,
    pub with_plate: usize,
}

impl VehicleStats {
    pub fn from_vehicles(vehicles: &[CanonicalVehicle]) -> Self {
        Self {
            total: vehicles.len(),
            with_plate: vehicles.iter().filter(|v| v.has_plate()).count(),
        }
    }
}
