// src/domain/reports.rs

//! Reporting a renter's profile.
//!
//! The server owns the rules (one live report per renter, a daily cap). This side only
//! validates the form and reflects whatever the server answered.

use serde::Serialize;

pub const MAX_ADDITIONAL_INFO_CHARS: usize = 200;

/// Status of a prior report that no longer counts against the reporter.
pub const REJECTED_STATUS: &str = "RECHAZADO";

const DAILY_LIMIT_MARKER: &str = "límite de reportes";
const ALREADY_REPORTED_MARKER: &str = "reportado a este usuario";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportReason {
    #[serde(rename = "información_falsa")]
    FalseInformation,
    #[serde(rename = "comportamiento_inapropiado")]
    InappropriateBehavior,
    #[serde(rename = "daños_propiedad")]
    PropertyDamage,
    #[serde(rename = "incumplimiento_normas")]
    RuleViolation,
    #[serde(rename = "otro")]
    Other,
}

impl ReportReason {
    pub const ALL: [ReportReason; 5] = [
        ReportReason::FalseInformation,
        ReportReason::InappropriateBehavior,
        ReportReason::PropertyDamage,
        ReportReason::RuleViolation,
        ReportReason::Other,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            ReportReason::FalseInformation => "información_falsa",
            ReportReason::InappropriateBehavior => "comportamiento_inapropiado",
            ReportReason::PropertyDamage => "daños_propiedad",
            ReportReason::RuleViolation => "incumplimiento_normas",
            ReportReason::Other => "otro",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_wire() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportReason::FalseInformation => "Información falsa en el perfil",
            ReportReason::InappropriateBehavior => "Comportamiento inapropiado",
            ReportReason::PropertyDamage => "Daños a la propiedad",
            ReportReason::RuleViolation => "Incumplimiento de normas",
            ReportReason::Other => "Otro motivo",
        }
    }
}

/// A report already filed against the renter, as listed by `/api/reportes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorReport {
    pub status: String,
}

/// Any prior report that wasn't rejected blocks another one.
pub fn has_reported_before(prior: &[PriorReport]) -> bool {
    prior.iter().any(|r| r.status != REJECTED_STATUS)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Ya has reportado a este usuario anteriormente")]
    AlreadyReported,
    #[error("Por favor, seleccione un motivo para el reporte")]
    MissingReason,
    #[error("La información adicional no puede exceder los {max} caracteres")]
    InfoTooLong { max: usize },
}

/// What the user typed into the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportDraft {
    pub reason: Option<ReportReason>,
    pub additional_info: String,
}

impl ReportDraft {
    pub fn info_len(&self) -> usize {
        self.additional_info.chars().count()
    }

    pub fn validate(
        &self,
        reported_id: &str,
        already_reported: bool,
    ) -> Result<ReportSubmission, DraftError> {
        if already_reported {
            return Err(DraftError::AlreadyReported);
        }
        let reason = self.reason.ok_or(DraftError::MissingReason)?;
        if self.info_len() > MAX_ADDITIONAL_INFO_CHARS {
            return Err(DraftError::InfoTooLong {
                max: MAX_ADDITIONAL_INFO_CHARS,
            });
        }

        Ok(ReportSubmission {
            reported_id: reported_id.to_string(),
            reason,
            additional_info: self.additional_info.clone(),
        })
    }
}

/// Body of `POST /api/reportes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSubmission {
    #[serde(rename = "id_reportado")]
    pub reported_id: String,
    #[serde(rename = "motivo")]
    pub reason: ReportReason,
    #[serde(rename = "informacion_adicional")]
    pub additional_info: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Submitted,
    DailyLimitReached,
    AlreadyReported,
    Rejected(String),
}

impl ReportOutcome {
    /// Classifies the `error` text of a failed submission.
    pub fn from_server_error(message: &str) -> Self {
        if message.contains(DAILY_LIMIT_MARKER) {
            ReportOutcome::DailyLimitReached
        } else if message.contains(ALREADY_REPORTED_MARKER) {
            ReportOutcome::AlreadyReported
        } else if message.trim().is_empty() {
            ReportOutcome::Rejected("No se pudo enviar el reporte".to_string())
        } else {
            ReportOutcome::Rejected(message.to_string())
        }
    }
}

/// State of the report dialog for one renter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportDialog {
    pub already_reported: bool,
    pub daily_limit_reached: bool,
    pub notice: Option<String>,
    pub submitted: bool,
}

impl ReportDialog {
    pub fn new(prior: &[PriorReport]) -> Self {
        Self {
            already_reported: has_reported_before(prior),
            ..Self::default()
        }
    }

    /// The form is disabled once the server has said no more reports.
    pub fn locked(&self) -> bool {
        self.already_reported || self.daily_limit_reached
    }

    pub fn apply(&mut self, outcome: ReportOutcome) {
        match outcome {
            ReportOutcome::Submitted => {
                self.submitted = true;
                self.notice = Some(
                    "Reporte enviado. Su reporte ha sido enviado correctamente y será revisado por nuestro equipo."
                        .to_string(),
                );
            }
            ReportOutcome::DailyLimitReached => {
                self.daily_limit_reached = true;
                self.notice = Some("Has alcanzado el límite de reportes por día".to_string());
            }
            ReportOutcome::AlreadyReported => {
                self.already_reported = true;
                self.notice = Some(DraftError::AlreadyReported.to_string());
            }
            ReportOutcome::Rejected(msg) => self.notice = Some(msg),
        }
    }

    pub fn reject_draft(&mut self, err: DraftError) {
        if err == DraftError::AlreadyReported {
            self.already_reported = true;
        }
        self.notice = Some(err.to_string());
    }

    pub fn message(&self) -> &'static str {
        if self.already_reported {
            "Ya has reportado a este usuario anteriormente. No puedes enviar múltiples reportes al mismo usuario."
        } else if self.daily_limit_reached {
            "Has alcanzado el límite de reportes por día (2 reportes/24 horas)."
        } else {
            "Por favor, indique el motivo por el cual está reportando a este arrendatario. Los reportes son anónimos y serán revisados por nuestro equipo."
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.already_reported {
            "No se permiten múltiples reportes"
        } else if self.daily_limit_reached {
            "Límite de reportes alcanzado"
        } else {
            "Enviar reporte"
        }
    }
}
