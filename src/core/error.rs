use std::fmt;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Categoria dell'errore, stabile e confrontabile dal chiamante
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// L'identità che agisce non ha i permessi di amministratore nel gruppo
    PermissionDenied,
    NotFound,
    /// Errore di rete (connessione, timeout, ...)
    Transport,
    /// Risposta del server inattesa o non valida
    Protocol,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::PermissionDenied => "permission denied",
            ErrorKind::NotFound => "not found",
            ErrorKind::Transport => "transport error",
            ErrorKind::Protocol => "protocol error",
            ErrorKind::Config => "configuration error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
#[error("{kind}: {message}{}", .details.as_ref().map(|d| format!(" ({d})")).unwrap_or_default())]
pub struct AppError {
    kind: ErrorKind,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn is_permission_denied(&self) -> bool {
        self.kind == ErrorKind::PermissionDenied
    }

    // Common error constructors
    pub fn permission_denied(message: &'static str) -> Self {
        Self::new(ErrorKind::PermissionDenied, message)
    }

    pub fn not_found(message: &'static str) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn transport(message: &'static str) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    pub fn protocol(message: &'static str) -> Self {
        Self::new(ErrorKind::Protocol, message)
    }

    pub fn config(message: &'static str) -> Self {
        Self::new(ErrorKind::Config, message)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::protocol("Malformed response body").with_details(err.to_string());
        }
        if err.is_timeout() {
            return Self::transport("Request timed out").with_details(err.to_string());
        }
        Self::transport("Request failed").with_details(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::protocol("Validation error").with_details(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::protocol("Malformed JSON payload").with_details(err.to_string())
    }
}
