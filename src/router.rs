use crate::api::Backend;
use crate::db::credentials::{clear_token, load_token, save_token};
use crate::db::Database;
use crate::domain::reports::{ReportDialog, ReportDraft, ReportReason};
use crate::domain::{comment_view, DateRange, Direction, Profile, QuerySpec, SortKey, VehicleBoard};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::pages::{
    comments_page, login_page, profile_page, report_page, vehicles_page, CommentsVm, ReportVm,
    VehiclesVm,
};
use astra::Request;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info, warn};
use url::form_urlencoded;

/// Form posts larger than this are rejected.
const MAX_FORM_BYTES: u64 = 16 * 1024;

type Params = HashMap<String, String>;

/// Everything a request handler needs.
pub struct App {
    pub db: Database,
    pub backend: Box<dyn Backend>,
}

impl App {
    pub fn new(db: Database, backend: impl Backend + 'static) -> Self {
        Self {
            db,
            backend: Box::new(backend),
        }
    }
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let params = parse_query(&req);
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") | ("GET", "/perfil") => profile(app),

        ("GET", "/login") => html_response(login_page(None)),
        ("POST", "/login") => {
            let form = read_form(&mut req)?;
            login(app, form.get("token").map(String::as_str).unwrap_or_default())
        }
        ("POST", "/logout") => {
            clear_token(&app.db)?;
            info!("signed out");
            redirect("/login")
        }

        ("GET", "/calificaciones") => comments(app, &params),
        ("GET", "/vehiculos") => vehicles(app, &params),

        (m, p) if p.starts_with("/reportes/") => {
            let reported_id = p.trim_start_matches("/reportes/").trim_matches('/');
            if reported_id.is_empty() || reported_id.contains('/') {
                return Err(ServerError::NotFound);
            }
            let name = params
                .get("nombre")
                .filter(|n| !n.trim().is_empty())
                .map(String::as_str)
                .unwrap_or("Arrendatario");

            match m {
                "GET" => report_form(app, reported_id, name),
                "POST" => {
                    let form = read_form(&mut req)?;
                    report_submit(app, reported_id, name, &form)
                }
                _ => Err(ServerError::NotFound),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<Params, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("cuerpo ilegible: {e}")))?;

    if bytes.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("formulario demasiado grande".into()));
    }
    Ok(form_urlencoded::parse(&bytes).into_owned().collect())
}

/// The stored token and the profile it resolves to, or `None` when nobody is signed in.
fn current_session(app: &App) -> Result<Option<(String, Profile)>, ServerError> {
    let Some(token) = load_token(&app.db)? else {
        return Ok(None);
    };
    let profile = app
        .backend
        .profile(&token)
        .inspect_err(|e| warn!(error = %e, "profile unavailable"))?;
    Ok(Some((token, profile)))
}

fn require_host(profile: &Profile) -> Result<(), ServerError> {
    if profile.is_host() {
        Ok(())
    } else {
        warn!(user = profile.id, "non-host requested a host page");
        Err(ServerError::Forbidden(
            "No tienes permiso para ver esta página.".into(),
        ))
    }
}

fn login(app: &App, token: &str) -> ResultResp {
    let token = token.trim();
    if token.is_empty() {
        return html_response(login_page(Some("Ingrese un token válido.")));
    }

    match app.backend.profile(token) {
        Ok(profile) => {
            save_token(&app.db, token)?;
            info!(user = profile.id, "signed in");
            redirect("/perfil")
        }
        Err(e) => {
            warn!(error = %e, "login rejected");
            let message = match ServerError::from(e) {
                ServerError::Unauthorized(_) => "El token no es válido.".to_string(),
                other => other.to_string(),
            };
            html_response(login_page(Some(&message)))
        }
    }
}

fn profile(app: &App) -> ResultResp {
    let Some((_, profile)) = current_session(app)? else {
        return redirect("/login");
    };
    html_response(profile_page(&profile))
}

/// Builds the listing query from URL parameters. Unknown or malformed values take defaults.
fn comment_query(params: &Params) -> QuerySpec {
    let param = |key: &str| params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
    let day = |key: &str| param(key).and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok());

    let mut spec = QuerySpec::default();
    if let Some(q) = param("q") {
        spec.set_search(q);
    }
    spec.set_date_range(DateRange::from_days(day("desde"), day("hasta")));
    if let Some(key) = param("orden").and_then(SortKey::from_param) {
        spec.set_sort_key(key);
    }
    if let Some(dir) = param("direccion").and_then(Direction::from_param) {
        spec.set_direction(dir);
    }
    // Last, since every setter above goes back to page 1.
    if let Some(page) = param("pagina").and_then(|p| p.parse::<usize>().ok()) {
        spec.set_page(page);
    }
    spec
}

fn comments(app: &App, params: &Params) -> ResultResp {
    let Some((token, profile)) = current_session(app)? else {
        return redirect("/login");
    };
    require_host(&profile)?;

    let spec = comment_query(params);
    let (comments, load_error) = match app.backend.host_comments(&token, profile.id) {
        Ok(comments) => (comments, None),
        Err(e) => {
            warn!(host = profile.id, error = %e, "comments unavailable");
            match ServerError::from(e) {
                ServerError::Unauthorized(msg) => return Err(ServerError::Unauthorized(msg)),
                other => (
                    Vec::new(),
                    Some(format!("No se pudieron cargar los comentarios. {other}")),
                ),
            }
        }
    };

    let view = comment_view(&comments, &spec);
    html_response(comments_page(&CommentsVm {
        profile: &profile,
        spec: &spec,
        view: &view,
        load_error: load_error.as_deref(),
    }))
}

fn vehicles(app: &App, params: &Params) -> ResultResp {
    let Some((token, profile)) = current_session(app)? else {
        return redirect("/login");
    };
    require_host(&profile)?;

    let requested = params
        .get("seleccion")
        .and_then(|id| id.trim().parse::<i64>().ok());

    let board = match app.backend.host_vehicles(&token, profile.id) {
        Ok(fetch) => Ok(VehicleBoard::new(fetch.vehicles, requested)),
        Err(e) => {
            warn!(host = profile.id, error = %e, "vehicles unavailable");
            match ServerError::from(e) {
                ServerError::Unauthorized(msg) => return Err(ServerError::Unauthorized(msg)),
                other => Err(format!("No se pudieron cargar tus vehículos. {other}")),
            }
        }
    };

    html_response(vehicles_page(&VehiclesVm {
        profile: &profile,
        board: board.as_ref().map_err(Clone::clone),
    }))
}

/// Opens the dialog from the reports already filed. When that list can't be read the dialog
/// opens unlocked; the backend still refuses a duplicate on submission.
fn report_dialog(app: &App, token: &str, reported_id: &str) -> Result<ReportDialog, ServerError> {
    match app.backend.reports_against(token, reported_id) {
        Ok(prior) => Ok(ReportDialog::new(&prior)),
        Err(e) => {
            warn!(reported = reported_id, error = %e, "prior reports unavailable");
            match ServerError::from(e) {
                ServerError::Unauthorized(msg) => Err(ServerError::Unauthorized(msg)),
                _ => Ok(ReportDialog::new(&[])),
            }
        }
    }
}

fn report_form(app: &App, reported_id: &str, name: &str) -> ResultResp {
    let Some((token, profile)) = current_session(app)? else {
        return redirect("/login");
    };
    require_host(&profile)?;

    let dialog = report_dialog(app, &token, reported_id)?;
    html_response(report_page(&ReportVm {
        profile: &profile,
        reported_id,
        reported_name: name,
        dialog: &dialog,
        draft: &ReportDraft::default(),
    }))
}

fn report_submit(app: &App, reported_id: &str, name: &str, form: &Params) -> ResultResp {
    let Some((token, profile)) = current_session(app)? else {
        return redirect("/login");
    };
    require_host(&profile)?;

    let draft = ReportDraft {
        reason: form
            .get("motivo")
            .and_then(|m| ReportReason::from_wire(m)),
        additional_info: form
            .get("informacion_adicional")
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    };

    let mut dialog = report_dialog(app, &token, reported_id)?;
    match draft.validate(reported_id, dialog.already_reported) {
        Ok(submission) => {
            let outcome = app
                .backend
                .submit_report(&token, &submission)
                .inspect_err(|e| warn!(reported = reported_id, error = %e, "report not sent"))?;
            info!(reported = reported_id, ?outcome, "report submitted");
            dialog.apply(outcome);
        }
        Err(e) => {
            debug!(reported = reported_id, error = %e, "report draft rejected");
            dialog.reject_draft(e);
        }
    }

    html_response(report_page(&ReportVm {
        profile: &profile,
        reported_id,
        reported_name: name,
        dialog: &dialog,
        draft: &draft,
    }))
}
