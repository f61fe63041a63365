mod api_error;
mod client;

pub use api_error::ApiError;
pub use client::ApiClient;

use crate::domain::normalize::VehicleFetch;
use crate::domain::reports::{PriorReport, ReportOutcome, ReportSubmission};
use crate::domain::{CanonicalComment, Profile};

/// The booking backend as seen by the web UI. Every call carries the user's bearer token.
///
/// Implementations hand back canonical records; raw payloads never leave this layer.
pub trait Backend: Send + Sync {
    fn profile(&self, token: &str) -> Result<Profile, ApiError>;

    fn host_vehicles(&self, token: &str, host_id: i64) -> Result<VehicleFetch, ApiError>;

    fn host_comments(&self, token: &str, host_id: i64) -> Result<Vec<CanonicalComment>, ApiError>;

    fn reports_against(&self, token: &str, reported_id: &str) -> Result<Vec<PriorReport>, ApiError>;

    fn submit_report(
        &self,
        token: &str,
        submission: &ReportSubmission,
    ) -> Result<ReportOutcome, ApiError>;
}
