use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Machine-readable classification of a failed completion, surfaced to the
/// caller alongside a human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    CredentialMissing,
    TransportError,
    EmptyResponse,
    UnknownError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::CredentialMissing => "CREDENTIAL_MISSING",
            ErrorCode::TransportError => "TRANSPORT_ERROR",
            ErrorCode::EmptyResponse => "EMPTY_RESPONSE",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(error: &DomainError) -> Self {
        match error {
            DomainError::MissingCredential(_) => ErrorCode::CredentialMissing,
            DomainError::Transport(_) => ErrorCode::TransportError,
            DomainError::EmptyResponse(_) => ErrorCode::EmptyResponse,
            DomainError::IoError(_) | DomainError::Internal(_) => ErrorCode::UnknownError,
        }
    }
}

/// Outcome of a single completion call.
///
/// A tagged union rather than a `Result`: every failure the client can hit is
/// recovered at the component boundary and handed back as data, so call sites
/// are total over their output. On `Success` the text is the model's reply,
/// unmodified (whitespace and newlines included). On `Failure` the text is a
/// human-readable description and [`ErrorCode`] classifies the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    Success { text: String },
    Failure { text: String, code: ErrorCode },
}

impl CompletionResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn failure(code: ErrorCode, text: impl Into<String>) -> Self {
        Self::Failure {
            text: text.into(),
            code,
        }
    }

    /// Convert a boundary error into its caller-facing failure form.
    pub fn from_error(error: &DomainError) -> Self {
        Self::Failure {
            text: error.to_string(),
            code: ErrorCode::from(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Reply text on success, error description on failure.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { text } | Self::Failure { text, .. } => text,
        }
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { code, .. } => Some(*code),
        }
    }
}
