use crate::error::ApiError;
use uuid::Uuid;

/// A malformed id can never name a stored photo, so it reads as not found.
pub fn parse_photo_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound)
}
