use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{ErrorCode, ErrorResponse, ValidationError};
use thiserror::Error;
use tracing::error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Not found")]
    NotFound,
    #[error("You have already voted for this photo.")]
    AlreadyVoted,
    #[error("{0}")]
    Storage(#[from] StoreError),
    #[error("Failed to store uploaded file: {0}")]
    Upload(String),
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::Validation(_) => ErrorCode::InvalidInput,
            ApiError::NotFound => ErrorCode::NotFound,
            ApiError::AlreadyVoted => ErrorCode::AlreadyVoted,
            ApiError::Storage(_) | ApiError::Upload(_) => ErrorCode::SystemError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let code = self.code();
        if code == ErrorCode::SystemError {
            error!("{} {} failed: {}", req.method(), req.uri(), self);
        }

        let status = Status::from_code(code.status_code()).unwrap_or(Status::InternalServerError);
        rocket::Response::build_from(Json(ErrorResponse::new(self.to_string())).respond_to(req)?)
            .status(status)
            .ok()
    }
}
