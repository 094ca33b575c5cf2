use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Every way a leave operation can fail. A failure always precedes persistence.
#[derive(Debug, Display)]
pub enum LeaveError {
    #[display(fmt = "invalid input")]
    InvalidInput,

    #[display(fmt = "access denied")]
    AccessDenied,

    #[display(fmt = "leaves not remaining")]
    InsufficientBalance,

    #[display(fmt = "{} not found", _0)]
    NotFound(&'static str),

    #[display(fmt = "store error: {}", _0)]
    Store(sqlx::Error),
}

impl std::error::Error for LeaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeaveError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for LeaveError {
    fn from(e: sqlx::Error) -> Self {
        LeaveError::Store(e)
    }
}

impl ResponseError for LeaveError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeaveError::InvalidInput => StatusCode::BAD_REQUEST,
            LeaveError::AccessDenied => StatusCode::FORBIDDEN,
            LeaveError::InsufficientBalance => StatusCode::UNPROCESSABLE_ENTITY,
            LeaveError::NotFound(_) => StatusCode::NOT_FOUND,
            LeaveError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // driver messages stay in the logs
        let message = match self {
            LeaveError::Store(e) => {
                tracing::error!(error = %e, "leave store statement failed");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}
