use serde::{Serialize, Deserialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub email: String,
    pub src: String,
    pub votes: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub uploaded_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub id: Uuid,
    pub user: String,
    pub votes: Vec<Uuid>,
}

/// Raw form fields of an upload, before any checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSubmission {
    pub title: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub file_name: Option<String>,
}

/// A submission that passed validation, with its text fields escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPhoto {
    pub title: String,
    pub author: String,
    pub email: String,
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPhoto {
    pub title: String,
    pub author: String,
    pub email: String,
    pub src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteResponse {
    pub message: String,
}

impl VoteResponse {
    pub fn ok() -> Self {
        Self { message: "OK".into() }
    }
}

impl Voter {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: user.into(),
            votes: Vec::new(),
        }
    }

    pub fn has_voted_for(&self, photo_id: Uuid) -> bool {
        self.votes.contains(&photo_id)
    }
}

impl NewPhoto {
    pub fn from_validated(photo: ValidatedPhoto, src: impl Into<String>) -> Self {
        Self {
            title: photo.title,
            author: photo.author,
            email: photo.email,
            src: src.into(),
        }
    }

    pub fn into_photo(self) -> Photo {
        Photo {
            id: Uuid::new_v4(),
            title: self.title,
            author: self.author,
            email: self.email,
            src: self.src,
            votes: 0,
            uploaded_at: OffsetDateTime::now_utc(),
        }
    }
}
