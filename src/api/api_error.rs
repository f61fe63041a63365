use crate::domain::NormalizeError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No se encontró el token de autenticación")]
    MissingCredential,
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Backend answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Decode(String),
    #[error("Unexpected data shape: {0}")]
    Malformed(#[from] NormalizeError),
}

impl ApiError {
    /// What the user is told. The `Display` text carries the detail for the logs.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::MissingCredential => self.to_string(),
            ApiError::InvalidUrl(_) | ApiError::Network(_) => {
                "No se pudo conectar con el servidor.".to_string()
            }
            ApiError::Status { status, .. } => {
                format!("El servidor respondió con un error ({status}).")
            }
            ApiError::Decode(_) | ApiError::Malformed(_) => {
                "La respuesta del servidor no tiene el formato esperado.".to_string()
            }
        }
    }
}
