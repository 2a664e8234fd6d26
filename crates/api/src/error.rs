use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use showtracker_core::error::CoreError;
use showtracker_core::schema::ValidationError;
use showtracker_core::types::DbId;
use showtracker_db::StoreError;

use crate::response::{Envelope, EnvelopeError};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure is rendered as an
/// [`Envelope`] with `success: false` and `result: null`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `showtracker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure inside the record store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Server code handed the envelope builder something it cannot wrap.
    #[error("Envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The request could not be decoded (malformed JSON, wrong content type,
    /// undecodable path or query).
    #[error("Rejected request: {message}")]
    Rejected { status: StatusCode, message: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Core(CoreError::Validation(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl AppError {
    /// A not-found error for `entity` with the given id.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::Core(CoreError::NotFound { entity, id })
    }

    /// The status code and client-facing message for this error.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        format!("No {} with this id exists", entity.to_lowercase()),
                    )
                }
                CoreError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            },

            // --- Server-side faults ---
            AppError::Store(err) => internal(err),
            AppError::Envelope(err) => internal(err),
            AppError::InternalError(msg) => internal(msg),

            // --- HTTP-specific errors ---
            AppError::Rejected { status, message } => (*status, message.clone()),
        }
    }
}

/// Log the real cause and hand the client a sanitized message.
fn internal(cause: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!(error = %cause, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        Envelope::message(status, message).into_response()
    }
}
