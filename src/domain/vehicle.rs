// src/domain/vehicle.rs

use crate::domain::selection::Identified;

/// Availability of a vehicle as shown on the host dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    Available,
    Reserved,
    /// Anything the backend reports that isn't available or reserved lands here.
    #[default]
    Maintenance,
}

impl Availability {
    /// Maps the backend `estado` string. Unknown values are treated as maintenance.
    pub fn from_source(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "disponible" => Availability::Available,
            "reservado" => Availability::Reserved,
            _ => Availability::Maintenance,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "DISPONIBLE",
            Availability::Reserved => "RESERVADO",
            Availability::Maintenance => "MANTENIMIENTO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub street: String,
    pub house_number: String,
    pub province: String,
    pub city: String,
}

/// An image attached to a vehicle. `source` is either a URL or inline data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VehicleImage {
    pub source: String,
    pub public_id: Option<String>,
}

/// A host vehicle after normalization. Every field is populated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanonicalVehicle {
    pub id: i64,
    pub vin: String,
    pub year: i32,
    pub brand: String,
    pub model: String,
    pub plate: String,
    pub seats: u32,
    pub doors: u32,
    pub insured: bool,
    pub daily_price: f64,
    pub maintenance_count: u32,
    pub transmission: String,
    pub availability: Availability,
    pub address: Address,
    pub fuel_types: Vec<String>,
    pub features: Vec<String>,
    pub images: Vec<VehicleImage>,
}

impl CanonicalVehicle {
    pub fn has_plate(&self) -> bool {
        !self.plate.trim().is_empty()
    }

    pub fn primary_fuel(&self) -> Option<&str> {
        self.fuel_types.first().map(String::as_str)
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model).trim().to_string()
    }
}

impl Identified for CanonicalVehicle {
    fn id(&self) -> i64 {
        self.id
    }
}
