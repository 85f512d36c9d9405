use sqlx::PgPool;
use uuid::Uuid;
use shared::models::*;
use crate::store::{PhotoStore, Store, StoreError, VoterStore};

const PHOTO_COLUMNS: &str = "id, title, author, email, src, votes, uploaded_at";
const VOTER_COLUMNS: &str = r#"id, client_ip AS "user", votes"#;

/// Postgres-backed photo and voter storage.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl PhotoStore for PgStore {
    async fn insert_photo(&self, photo: NewPhoto) -> Result<Photo, StoreError> {
        let photo = photo.into_photo();
        let stored = sqlx::query_as::<_, Photo>(&format!(
            "INSERT INTO photos (id, title, author, email, src, votes, uploaded_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {PHOTO_COLUMNS}"
        ))
        .bind(photo.id)
        .bind(&photo.title)
        .bind(&photo.author)
        .bind(&photo.email)
        .bind(&photo.src)
        .bind(photo.votes)
        .bind(photo.uploaded_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_photos(&self) -> Result<Vec<Photo>, StoreError> {
        let photos = sqlx::query_as::<_, Photo>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photos ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }

    async fn find_photo(&self, id: Uuid) -> Result<Option<Photo>, StoreError> {
        let photo = sqlx::query_as::<_, Photo>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(photo)
    }
}

#[rocket::async_trait]
impl VoterStore for PgStore {
    async fn find_voter(&self, user: &str) -> Result<Option<Voter>, StoreError> {
        let voter = sqlx::query_as::<_, Voter>(&format!(
            "SELECT {VOTER_COLUMNS} FROM voters WHERE client_ip = $1"
        ))
        .bind(user)
        .fetch_optional(&self.pool)
        .await?;

        Ok(voter)
    }

    async fn create_voter(&self, user: &str) -> Result<Voter, StoreError> {
        // unique_voter turns a concurrent second insert into a no-op
        sqlx::query(
            "INSERT INTO voters (id, client_ip, votes) VALUES ($1, $2, '{}')
             ON CONFLICT ON CONSTRAINT unique_voter DO NOTHING"
        )
        .bind(Uuid::new_v4())
        .bind(user)
        .execute(&self.pool)
        .await?;

        self.find_voter(user).await?.ok_or(StoreError::NotFound)
    }
}

#[rocket::async_trait]
impl Store for PgStore {
    async fn record_vote(&self, user: &str, photo_id: Uuid) -> Result<Option<i64>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let added = sqlx::query(
            "UPDATE voters SET votes = array_append(votes, $2)
             WHERE client_ip = $1 AND NOT ($2 = ANY(votes))"
        )
        .bind(user)
        .bind(photo_id)
        .execute(&mut *tx)
        .await?;

        if added.rows_affected() != 1 {
            tx.rollback().await?;
            return Ok(None);
        }

        // dropping tx on the early return rolls the append back
        let votes = sqlx::query_scalar::<_, i64>(
            "UPDATE photos SET votes = votes + 1 WHERE id = $1 RETURNING votes"
        )
        .bind(photo_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StoreError::NotFound)?;

        tx.commit().await?;
        Ok(Some(votes))
    }
}
