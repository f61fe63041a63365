// src/domain/normalize.rs

//! Reconciles backend payloads into canonical records.
//!
//! The backend has shipped several shapes for the same record over time: fields get renamed
//! (`vim`/`vin`, `anio`/`año`, `transmision`/`transmicion`), nested relations come back flat or
//! nested, and numbers sometimes arrive as strings. Every field is resolved through an ordered
//! alias table below. The first alias that yields a usable value wins; otherwise the field
//! takes its default.
//!
//! Record-level normalization is total. Only the envelope can fail: a fetch whose record list
//! is missing, or whose list contains something that isn't a record, is rejected as a whole.

use crate::domain::comment::{AuthorSummary, CanonicalComment, VehicleSummary};
use crate::domain::profile::Profile;
use crate::domain::reports::PriorReport;
use crate::domain::vehicle::{Address, Availability, CanonicalVehicle, VehicleImage};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// A path into a JSON object, e.g. `&["direccion", "calle"]`.
type Path = &'static [&'static str];

/// Ordered alternatives for one canonical field.
type Aliases = &'static [Path];

mod vehicle_fields {
    use super::Aliases;

    pub const ID: Aliases = &[&["id"], &["id_carro"]];
    pub const VIN: Aliases = &[&["vim"], &["vin"]];
    pub const YEAR: Aliases = &[&["anio"], &["año"]];
    pub const BRAND: Aliases = &[&["marca"]];
    pub const MODEL: Aliases = &[&["modelo"]];
    pub const PLATE: Aliases = &[&["placa"]];
    pub const SEATS: Aliases = &[&["asientos"]];
    pub const DOORS: Aliases = &[&["puertas"]];
    pub const INSURED: Aliases = &[&["soat"]];
    pub const DAILY_PRICE: Aliases = &[&["precio_por_dia"]];
    pub const MAINTENANCE: Aliases = &[&["num_mantenimientos"]];
    pub const TRANSMISSION: Aliases = &[&["transmision"], &["transmicion"]];
    pub const STATE: Aliases = &[&["estado"]];

    pub const STREET: Aliases = &[&["direccion"], &["direccion", "calle"]];
    pub const HOUSE_NUMBER: Aliases = &[&["num_casa"], &["direccion", "num_casa"]];
    pub const PROVINCE: Aliases = &[&["provincia"], &["direccion", "provincia", "nombre"]];
    pub const CITY: Aliases = &[
        &["ciudad"],
        &["direccion", "provincia", "ciudad", "nombre"],
    ];

    pub const FUELS: Aliases = &[&["combustibles"], &["combustiblesporCarro"]];
    pub const FUEL_NAME: Aliases = &[&["tipoDeCombustible"], &["combustible", "tipoDeCombustible"]];

    pub const FEATURES: Aliases = &[&["caracteristicas"], &["caracteristicasAdicionalesCarro"]];
    pub const FEATURE_NAME: Aliases = &[&["nombre"], &["carasteristicasAdicionales", "nombre"]];

    pub const IMAGES: Aliases = &[&["imagenes"]];
}

mod image_fields {
    use super::Aliases;

    pub const SOURCE: Aliases = &[&["url"], &["data"]];
    pub const PUBLIC_ID: Aliases = &[&["public_id"]];
}

mod comment_fields {
    use super::{Aliases, Path};

    pub const ID: Aliases = &[&["id"]];
    pub const VEHICLE_ID: Aliases = &[&["id_carro"], &["carro", "id"]];
    pub const AUTHOR_ID: Aliases = &[&["id_usuario"], &["usuario", "id"]];
    pub const BODY: Aliases = &[&["comentario"]];
    pub const RATING: Aliases = &[&["calificacion"]];
    pub const CREATED_AT: Aliases = &[&["fecha_creacion"]];
    pub const UPDATED_AT: Aliases = &[&["fecha_actualizacion"], &["fecha_creacion"]];

    pub const AUTHOR_NAME: Aliases = &[&["usuario", "nombre"]];
    pub const AUTHOR_PHOTO: Aliases = &[&["usuario", "foto"]];
    pub const VEHICLE: Path = &["carro"];
}

mod summary_fields {
    use super::Aliases;

    pub const ID: Aliases = &[&["id"]];
    pub const BRAND: Aliases = &[&["marca"]];
    pub const MODEL: Aliases = &[&["modelo"]];
    pub const YEAR: Aliases = &[&["anio"], &["año"]];
    pub const IMAGES: Aliases = &[&["imagenes"]];
    pub const OWNER_ROLE_ID: Aliases = &[&["id_usuario_rol"]];
}

mod profile_fields {
    use super::Aliases;

    pub const ID: Aliases = &[&["id"], &["id_usuario"]];
    pub const NAME: Aliases = &[&["nombre"]];
    pub const ROLES: Aliases = &[&["roles"]];
}

mod report_fields {
    use super::Aliases;

    pub const STATUS: Aliases = &[&["estado"]];
}

pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("malformed {context}: {reason}")]
    MalformedRecord {
        context: &'static str,
        reason: String,
    },
}

impl NormalizeError {
    fn malformed(context: &'static str, reason: impl Into<String>) -> Self {
        NormalizeError::MalformedRecord {
            context,
            reason: reason.into(),
        }
    }
}

/// Counters the backend sends alongside the vehicle list. Kept for cross-checking only;
/// the dashboard recomputes its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportedCounts {
    pub total: Option<u64>,
    pub with_plate: Option<u64>,
}

/// Result of normalizing one `/api/carros/{hostId}` response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VehicleFetch {
    pub vehicles: Vec<CanonicalVehicle>,
    pub reported: ReportedCounts,
}

// ---- value extraction ----

fn lookup<'a>(raw: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(raw, |node, key| node.as_object()?.get(*key))
}

/// Tries each alias in order and returns the first value `extract` accepts.
fn resolve<'a, T>(
    raw: &'a Value,
    aliases: Aliases,
    extract: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    aliases
        .iter()
        .find_map(|path| lookup(raw, path).and_then(&extract))
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn integer(value: &Value) -> Option<i64> {
    number(value).map(|n| n.trunc() as i64)
}

/// Non-negative count. Negative input is treated as unusable.
fn count(value: &Value) -> Option<u32> {
    integer(value).and_then(|n| u32::try_from(n).ok())
}

/// A year of zero means "unknown", so it falls through to the next alias.
fn year(value: &Value) -> Option<i32> {
    integer(value)
        .and_then(|n| i32::try_from(n).ok())
        .filter(|y| *y != 0)
}

fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "si" | "sí" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Accepts RFC 3339, naive date-times (read as UTC), bare dates and epoch milliseconds.
fn timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::String(s) => parse_timestamp(s.trim()),
        _ => None,
    }
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn list<'a>(raw: &'a Value, aliases: Aliases) -> &'a [Value] {
    resolve(raw, aliases, |v| v.as_array().map(Vec::as_slice)).unwrap_or_default()
}

/// Names out of a relation list. Entries may be plain strings or objects.
fn names(raw: &Value, list_aliases: Aliases, name_aliases: Aliases) -> Vec<String> {
    list(raw, list_aliases)
        .iter()
        .filter_map(|item| text(item).or_else(|| resolve(item, name_aliases, text)))
        .collect()
}

fn images(raw: &Value, aliases: Aliases) -> Vec<VehicleImage> {
    list(raw, aliases)
        .iter()
        .filter_map(|item| {
            let source = text(item).or_else(|| resolve(item, image_fields::SOURCE, text))?;
            Some(VehicleImage {
                source,
                public_id: resolve(item, image_fields::PUBLIC_ID, text),
            })
        })
        .collect()
}

fn string_or_empty(raw: &Value, aliases: Aliases) -> String {
    resolve(raw, aliases, text).unwrap_or_default()
}

// ---- records ----

/// Normalizes one raw vehicle record. Never fails.
pub fn normalize_vehicle(raw: &Value) -> CanonicalVehicle {
    use vehicle_fields as f;

    CanonicalVehicle {
        id: resolve(raw, f::ID, integer).unwrap_or(0),
        vin: string_or_empty(raw, f::VIN),
        year: resolve(raw, f::YEAR, year).unwrap_or(0),
        brand: string_or_empty(raw, f::BRAND),
        model: string_or_empty(raw, f::MODEL),
        plate: string_or_empty(raw, f::PLATE),
        seats: resolve(raw, f::SEATS, count).unwrap_or(0),
        doors: resolve(raw, f::DOORS, count).unwrap_or(0),
        insured: resolve(raw, f::INSURED, flag).unwrap_or(false),
        daily_price: resolve(raw, f::DAILY_PRICE, number)
            .unwrap_or(0.0)
            .max(0.0),
        maintenance_count: resolve(raw, f::MAINTENANCE, count).unwrap_or(0),
        transmission: string_or_empty(raw, f::TRANSMISSION),
        availability: resolve(raw, f::STATE, |v| v.as_str().map(Availability::from_source))
            .unwrap_or_default(),
        address: Address {
            street: string_or_empty(raw, f::STREET),
            house_number: string_or_empty(raw, f::HOUSE_NUMBER),
            province: string_or_empty(raw, f::PROVINCE),
            city: string_or_empty(raw, f::CITY),
        },
        fuel_types: names(raw, f::FUELS, f::FUEL_NAME),
        features: names(raw, f::FEATURES, f::FEATURE_NAME),
        images: images(raw, f::IMAGES),
    }
}

fn normalize_vehicle_summary(raw: &Value) -> VehicleSummary {
    use summary_fields as f;

    VehicleSummary {
        id: resolve(raw, f::ID, integer).unwrap_or(0),
        brand: string_or_empty(raw, f::BRAND),
        model: string_or_empty(raw, f::MODEL),
        year: resolve(raw, f::YEAR, year).unwrap_or(0),
        images: images(raw, f::IMAGES),
        owner_role_id: resolve(raw, f::OWNER_ROLE_ID, integer).unwrap_or(0),
    }
}

/// Normalizes one raw comment record. Never fails.
///
/// Unparseable timestamps become the Unix epoch. The update timestamp falls back to the
/// creation timestamp. Ratings are clamped into `0.0..=5.0`.
pub fn normalize_comment(raw: &Value) -> CanonicalComment {
    use comment_fields as f;

    let author_id = resolve(raw, f::AUTHOR_ID, integer).unwrap_or(0);
    let created_at = resolve(raw, f::CREATED_AT, timestamp).unwrap_or_default();

    CanonicalComment {
        id: resolve(raw, f::ID, integer).unwrap_or(0),
        vehicle_id: resolve(raw, f::VEHICLE_ID, integer).unwrap_or(0),
        author_id,
        body: resolve(raw, f::BODY, |v| v.as_str().map(str::to_string)).unwrap_or_default(),
        rating: resolve(raw, f::RATING, number)
            .unwrap_or(0.0)
            .clamp(0.0, MAX_RATING),
        created_at,
        updated_at: resolve(raw, f::UPDATED_AT, timestamp).unwrap_or(created_at),
        author: AuthorSummary {
            id: author_id,
            name: string_or_empty(raw, f::AUTHOR_NAME),
            photo: resolve(raw, f::AUTHOR_PHOTO, text),
        },
        vehicle: lookup(raw, f::VEHICLE)
            .filter(|v| v.is_object())
            .map(normalize_vehicle_summary),
    }
}

// ---- fetch envelopes ----

fn records<'a>(list: &'a [Value], context: &'static str) -> Result<&'a [Value], NormalizeError> {
    match list.iter().position(|r| !r.is_object()) {
        Some(index) => Err(NormalizeError::malformed(
            context,
            format!("entry {index} is not a record"),
        )),
        None => Ok(list),
    }
}

/// Normalizes the `{ autos: [...], total, autos_con_placa }` envelope. All or nothing.
pub fn normalize_vehicle_fetch(payload: &Value) -> Result<VehicleFetch, NormalizeError> {
    let list = payload
        .get("autos")
        .and_then(Value::as_array)
        .ok_or_else(|| NormalizeError::malformed("vehicle list", "missing \"autos\" array"))?;

    let vehicles = records(list, "vehicle list")?
        .iter()
        .map(normalize_vehicle)
        .collect();

    Ok(VehicleFetch {
        vehicles,
        reported: ReportedCounts {
            total: payload.get("total").and_then(Value::as_u64),
            with_plate: payload.get("autos_con_placa").and_then(Value::as_u64),
        },
    })
}

/// Normalizes the bare comment list. All or nothing.
pub fn normalize_comment_fetch(payload: &Value) -> Result<Vec<CanonicalComment>, NormalizeError> {
    let list = payload
        .as_array()
        .ok_or_else(|| NormalizeError::malformed("comment list", "payload is not an array"))?;

    Ok(records(list, "comment list")?
        .iter()
        .map(normalize_comment)
        .collect())
}

/// Normalizes `/api/perfil`. A profile without an id means there is no session.
pub fn normalize_profile(payload: &Value) -> Result<Profile, NormalizeError> {
    use profile_fields as f;

    let id = resolve(payload, f::ID, integer)
        .ok_or_else(|| NormalizeError::malformed("profile", "missing user id"))?;

    let roles = list(payload, f::ROLES)
        .iter()
        .filter_map(|r| r.as_str().map(str::to_string))
        .collect();

    Ok(Profile {
        id,
        name: string_or_empty(payload, f::NAME),
        roles,
    })
}

/// Normalizes the list of reports already filed against a renter.
pub fn normalize_prior_reports(payload: &Value) -> Result<Vec<PriorReport>, NormalizeError> {
    let list = payload
        .as_array()
        .ok_or_else(|| NormalizeError::malformed("report list", "payload is not an array"))?;

    Ok(records(list, "report list")?
        .iter()
        .map(|r| PriorReport {
            status: string_or_empty(r, report_fields::STATUS),
        })
        .collect())
}
