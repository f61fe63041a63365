// src/tests/utils.rs

use crate::api::{ApiError, Backend};
use crate::db::credentials::save_token;
use crate::db::{init_db, Database};
use crate::domain::normalize::{
    normalize_comment_fetch, normalize_prior_reports, normalize_profile, normalize_vehicle_fetch,
    VehicleFetch,
};
use crate::domain::reports::{PriorReport, ReportOutcome, ReportSubmission};
use crate::domain::{CanonicalComment, Profile};
use crate::responses::{html_error_response, ResultResp};
use crate::router::{handle, App};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::io::Read;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const TOKEN: &str = "token-de-prueba";

/// A backend that answers from canned payloads, run through the real normalizers.
pub struct FakeBackend {
    pub profile: Value,
    /// Payload, or the HTTP status the backend fails with.
    pub vehicles: Result<Value, u16>,
    pub comments: Result<Value, u16>,
    pub prior_reports: Value,
    /// `error` text of a failed submission; `None` accepts it.
    pub submit_error: Option<String>,
    pub submissions: Arc<Mutex<Vec<ReportSubmission>>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            profile: host_profile(),
            vehicles: Ok(json!({ "autos": [], "total": 0, "autos_con_placa": 0 })),
            comments: Ok(json!([])),
            prior_reports: json!([]),
            submit_error: None,
            submissions: Arc::default(),
        }
    }
}

fn check(token: &str) -> Result<(), ApiError> {
    if token.is_empty() {
        return Err(ApiError::MissingCredential);
    }
    if token != TOKEN {
        return Err(ApiError::Status {
            status: 401,
            body: r#"{"error":"token inválido"}"#.into(),
        });
    }
    Ok(())
}

fn failed(status: u16) -> ApiError {
    ApiError::Status {
        status,
        body: "fallo del servidor".into(),
    }
}

impl Backend for FakeBackend {
    fn profile(&self, token: &str) -> Result<Profile, ApiError> {
        check(token)?;
        Ok(normalize_profile(&self.profile)?)
    }

    fn host_vehicles(&self, token: &str, _host_id: i64) -> Result<VehicleFetch, ApiError> {
        check(token)?;
        match &self.vehicles {
            Ok(payload) => Ok(normalize_vehicle_fetch(payload)?),
            Err(status) => Err(failed(*status)),
        }
    }

    fn host_comments(&self, token: &str, _host_id: i64) -> Result<Vec<CanonicalComment>, ApiError> {
        check(token)?;
        match &self.comments {
            Ok(payload) => Ok(normalize_comment_fetch(payload)?),
            Err(status) => Err(failed(*status)),
        }
    }

    fn reports_against(&self, token: &str, _reported_id: &str) -> Result<Vec<PriorReport>, ApiError> {
        check(token)?;
        Ok(normalize_prior_reports(&self.prior_reports)?)
    }

    fn submit_report(
        &self,
        token: &str,
        submission: &ReportSubmission,
    ) -> Result<ReportOutcome, ApiError> {
        check(token)?;
        self.submissions
            .lock()
            .expect("submissions lock")
            .push(submission.clone());
        Ok(match &self.submit_error {
            None => ReportOutcome::Submitted,
            Some(msg) => ReportOutcome::from_server_error(msg),
        })
    }
}

pub fn host_profile() -> Value {
    json!({ "id": 7, "nombre": "Ana Rojas", "roles": ["HOST"] })
}

pub fn renter_profile() -> Value {
    json!({ "id": 9, "nombre": "Luis Vaca", "roles": ["RENTER"] })
}

/// A fresh app on its own SQLite file. The directory lives as long as the struct.
pub struct TestApp {
    _dir: TempDir,
    pub app: App,
    pub submissions: Arc<Mutex<Vec<ReportSubmission>>>,
}

impl TestApp {
    pub fn anonymous(backend: FakeBackend) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = Database::new(dir.path().join("test.sqlite").to_string_lossy().into_owned());
        init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

        let submissions = Arc::clone(&backend.submissions);
        Self {
            _dir: dir,
            app: App::new(db, backend),
            submissions,
        }
    }

    pub fn signed_in(backend: FakeBackend) -> Self {
        let test = Self::anonymous(backend);
        save_token(&test.app.db, TOKEN).expect("save token");
        test
    }

    pub fn handle(&self, req: Request) -> ResultResp {
        handle(req, &self.app)
    }

    /// What the server would send, errors included.
    pub fn respond(&self, req: Request) -> Response {
        match self.handle(req) {
            Ok(resp) => resp,
            Err(err) => html_error_response(err),
        }
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn post_form(uri: &str, pairs: &[(&str, &str)]) -> Request {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request")
}

pub fn body_text(mut resp: Response) -> String {
    let mut text = String::new();
    resp.body_mut()
        .reader()
        .read_to_string(&mut text)
        .expect("read body");
    text
}

pub fn location(resp: &Response) -> Option<&str> {
    resp.headers().get("Location").and_then(|v| v.to_str().ok())
}
