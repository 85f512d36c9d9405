use tracing::{debug, info, instrument};
use uuid::Uuid;
use shared::models::*;
use shared::validation::validate_submission;
use crate::error::ApiError;
use crate::store::Store;

pub struct VoteProcessor;

impl VoteProcessor {
    /// Records one vote of `client` for `photo_id` and returns the photo's new count.
    #[instrument(skip(store))]
    pub async fn cast_vote(store: &dyn Store, photo_id: Uuid, client: &str) -> Result<i64, ApiError> {
        let photo = store.find_photo(photo_id).await?.ok_or(ApiError::NotFound)?;

        let voter = match store.find_voter(client).await? {
            Some(voter) => voter,
            None => {
                debug!("First vote from {}", client);
                store.create_voter(client).await?
            }
        };

        if voter.has_voted_for(photo.id) {
            debug!("Duplicate vote from {} for {}", client, photo.id);
            return Err(ApiError::AlreadyVoted);
        }

        // a concurrent request may have added the same vote since the read above
        let Some(votes) = store.record_vote(client, photo.id).await? else {
            debug!("Concurrent duplicate vote from {} for {}", client, photo.id);
            return Err(ApiError::AlreadyVoted);
        };

        info!("Vote from {} recorded for photo {} ({} total)", client, photo.id, votes);
        Ok(votes)
    }

    pub fn validate(submission: &PhotoSubmission) -> Result<ValidatedPhoto, ApiError> {
        Ok(validate_submission(submission)?)
    }

    pub async fn create_photo(store: &dyn Store, photo: ValidatedPhoto, src: &str) -> Result<Photo, ApiError> {
        let photo = store.insert_photo(NewPhoto::from_validated(photo, src)).await?;
        info!("Photo {} uploaded as {}", photo.id, photo.src);
        Ok(photo)
    }

    pub async fn list_photos(store: &dyn Store) -> Result<Vec<Photo>, ApiError> {
        Ok(store.list_photos().await?)
    }
}
