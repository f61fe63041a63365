// client.rs
use crate::api::{ApiError, Backend};
use crate::domain::derived::VehicleStats;
use crate::domain::normalize::{
    normalize_comment_fetch, normalize_prior_reports, normalize_profile, normalize_vehicle_fetch,
    VehicleFetch,
};
use crate::domain::reports::{PriorReport, ReportOutcome, ReportSubmission};
use crate::domain::{CanonicalComment, Profile};
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("redibo-front/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the booking backend.
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        // Url::join replaces the last segment unless the base ends in a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    fn authorized(&self, builder: RequestBuilder, token: &str) -> Result<RequestBuilder, ApiError> {
        if token.trim().is_empty() {
            return Err(ApiError::MissingCredential);
        }
        Ok(builder.bearer_auth(token))
    }

    fn get_json(&self, token: &str, url: Url) -> Result<Value, ApiError> {
        debug!(%url, "backend request");

        let resp = self
            .authorized(self.client.get(url.clone()), token)?
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "backend request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Maps the answer to `POST /api/reportes` onto an outcome. Failures carry `{ "error": "..." }`.
pub(crate) fn submission_outcome(success: bool, body: &str) -> ReportOutcome {
    if success {
        return ReportOutcome::Submitted;
    }
    let message = match serde_json::from_str::<Value>(body) {
        Ok(v) => v
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Err(_) => body.trim().to_string(),
    };
    ReportOutcome::from_server_error(&message)
}

impl Backend for ApiClient {
    fn profile(&self, token: &str) -> Result<Profile, ApiError> {
        let payload = self.get_json(token, self.endpoint("api/perfil")?)?;
        Ok(normalize_profile(&payload)?)
    }

    fn host_vehicles(&self, token: &str, host_id: i64) -> Result<VehicleFetch, ApiError> {
        let url = self.endpoint(&format!("api/carros/{host_id}"))?;
        let payload = self.get_json(token, url)?;

        let fetch = normalize_vehicle_fetch(&payload).inspect_err(|e| {
            warn!(host_id, error = %e, "rejected vehicle payload");
        })?;

        let stats = VehicleStats::from_vehicles(&fetch.vehicles);
        let reported_total = fetch.reported.total.map(|n| n as usize);
        let reported_plates = fetch.reported.with_plate.map(|n| n as usize);
        if reported_total.is_some_and(|n| n != stats.total)
            || reported_plates.is_some_and(|n| n != stats.with_plate)
        {
            warn!(
                host_id,
                ?reported_total,
                ?reported_plates,
                total = stats.total,
                with_plate = stats.with_plate,
                "backend counters disagree with the vehicle list"
            );
        }

        debug!(host_id, vehicles = fetch.vehicles.len(), "vehicles normalized");
        Ok(fetch)
    }

    fn host_comments(&self, token: &str, host_id: i64) -> Result<Vec<CanonicalComment>, ApiError> {
        let mut url = self.endpoint("api/comentarios-carro")?;
        url.query_pairs_mut()
            .append_pair("hostId", &host_id.to_string());

        let payload = self.get_json(token, url)?;
        let comments = normalize_comment_fetch(&payload).inspect_err(|e| {
            warn!(host_id, error = %e, "rejected comment payload");
        })?;

        debug!(host_id, comments = comments.len(), "comments normalized");
        Ok(comments)
    }

    fn reports_against(&self, token: &str, reported_id: &str) -> Result<Vec<PriorReport>, ApiError> {
        let mut url = self.endpoint("api/reportes")?;
        url.query_pairs_mut().append_pair("reportadoId", reported_id);

        let payload = self.get_json(token, url)?;
        Ok(normalize_prior_reports(&payload)?)
    }

    fn submit_report(
        &self,
        token: &str,
        submission: &ReportSubmission,
    ) -> Result<ReportOutcome, ApiError> {
        let url = self.endpoint("api/reportes")?;
        debug!(%url, reason = submission.reason.as_wire(), "submitting report");

        let resp = self
            .authorized(self.client.post(url), token)?
            .json(submission)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let success = resp.status().is_success();
        let body = resp.text().map_err(|e| ApiError::Network(e.to_string()))?;

        let outcome = submission_outcome(success, &body);
        if outcome != ReportOutcome::Submitted {
            warn!(?outcome, "report not accepted");
        }
        Ok(outcome)
    }
}
