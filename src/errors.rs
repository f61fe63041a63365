// errors.rs
use crate::api::ApiError;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, backend API).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("Database Error: {0}")]
    DbError(String),
    /// Carries the message shown to the user; the backend detail is logged where the call fails.
    #[error("{0}")]
    Upstream(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::Forbidden(_) => 403,
            ServerError::Upstream(_) => 502,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<ApiError> for ServerError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingCredential => ServerError::Unauthorized(err.to_string()),
            ApiError::Status { status: 401, .. } => {
                ServerError::Unauthorized("No hay sesión activa. Por favor, inicie sesión.".into())
            }
            other => ServerError::Upstream(other.user_message()),
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(err: rusqlite::Error) -> Self {
        ServerError::DbError(err.to_string())
    }
}
