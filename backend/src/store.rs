use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;
use shared::models::*;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,
    #[error("Store lock poisoned")]
    LockFailed,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[rocket::async_trait]
pub trait PhotoStore: Send + Sync {
    async fn insert_photo(&self, photo: NewPhoto) -> Result<Photo, StoreError>;
    /// All photos, oldest upload first.
    async fn list_photos(&self) -> Result<Vec<Photo>, StoreError>;
    async fn find_photo(&self, id: Uuid) -> Result<Option<Photo>, StoreError>;
}

#[rocket::async_trait]
pub trait VoterStore: Send + Sync {
    async fn find_voter(&self, user: &str) -> Result<Option<Voter>, StoreError>;
    /// Creates the voter or, when another request created it first, returns that one.
    async fn create_voter(&self, user: &str) -> Result<Voter, StoreError>;
}

#[rocket::async_trait]
pub trait Store: PhotoStore + VoterStore {
    /// Adds `photo_id` to the voter's set and increments the photo's counter as
    /// one unit. `None` when the voter already voted for it; on error neither
    /// write is applied.
    async fn record_vote(&self, user: &str, photo_id: Uuid) -> Result<Option<i64>, StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    photos: Mutex<Vec<Photo>>,
    voters: Mutex<HashMap<String, Voter>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mutations applied so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn photos(&self) -> Result<MutexGuard<'_, Vec<Photo>>, StoreError> {
        self.photos.lock().map_err(|_| StoreError::LockFailed)
    }

    fn voters(&self) -> Result<MutexGuard<'_, HashMap<String, Voter>>, StoreError> {
        self.voters.lock().map_err(|_| StoreError::LockFailed)
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[rocket::async_trait]
impl PhotoStore for MemoryStore {
    async fn insert_photo(&self, photo: NewPhoto) -> Result<Photo, StoreError> {
        let photo = photo.into_photo();
        self.photos()?.push(photo.clone());
        self.record_write();
        Ok(photo)
    }

    async fn list_photos(&self) -> Result<Vec<Photo>, StoreError> {
        Ok(self.photos()?.clone())
    }

    async fn find_photo(&self, id: Uuid) -> Result<Option<Photo>, StoreError> {
        Ok(self.photos()?.iter().find(|p| p.id == id).cloned())
    }
}

#[rocket::async_trait]
impl VoterStore for MemoryStore {
    async fn find_voter(&self, user: &str) -> Result<Option<Voter>, StoreError> {
        Ok(self.voters()?.get(user).cloned())
    }

    async fn create_voter(&self, user: &str) -> Result<Voter, StoreError> {
        let mut voters = self.voters()?;
        if let Some(existing) = voters.get(user) {
            return Ok(existing.clone());
        }
        let voter = Voter::new(user);
        voters.insert(user.to_string(), voter.clone());
        self.record_write();
        Ok(voter)
    }
}

#[rocket::async_trait]
impl Store for MemoryStore {
    async fn record_vote(&self, user: &str, photo_id: Uuid) -> Result<Option<i64>, StoreError> {
        // photos before voters, always
        let mut photos = self.photos()?;
        let mut voters = self.voters()?;

        let photo = photos.iter_mut().find(|p| p.id == photo_id).ok_or(StoreError::NotFound)?;
        let voter = voters.get_mut(user).ok_or(StoreError::NotFound)?;
        if voter.has_voted_for(photo_id) {
            return Ok(None);
        }

        voter.votes.push(photo_id);
        photo.votes += 1;
        self.record_write();
        self.record_write();
        Ok(Some(photo.votes))
    }
}
