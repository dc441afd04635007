use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde_json::json;

/// Which endpoint a malformed body was sent to. Picks the error prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Agent,
    Chat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Body could not be read or decoded into the expected payload.
    InvalidRequestShape { endpoint: Endpoint, detail: String },
    /// Chat history empty, or its last turn is not from the user.
    InvalidChatState,
}

impl ApiError {
    pub fn shape(endpoint: Endpoint, detail: impl Into<String>) -> Self {
        ApiError::InvalidRequestShape {
            endpoint,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::InvalidRequestShape { .. } => Status::InternalServerError,
            ApiError::InvalidChatState => Status::BadRequest,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidRequestShape {
                endpoint: Endpoint::Agent,
                detail,
            } => write!(f, "Failed to process request: {}", detail),
            ApiError::InvalidRequestShape {
                endpoint: Endpoint::Chat,
                detail,
            } => write!(f, "Failed to process chat: {}", detail),
            ApiError::InvalidChatState => write!(f, "Invalid message format"),
        }
    }
}

impl std::error::Error for ApiError {}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        log::warn!("{} {} rejected: {}", req.method(), req.uri(), self);
        (self.status(), Json(json!({ "error": self.to_string() }))).respond_to(req)
    }
}
