use std::path::PathBuf;
use std::sync::Arc;
use rocket::{State, get, post, put, http::Status, serde::json::Json};
use rocket::form::{Errors, Form, FromForm};
use rocket::fs::{NamedFile, TempFile};
use tracing::{debug, instrument};
use shared::{models::*, user_info::ClientInfo, ValidationError};
use crate::{
    config::AppConfig,
    error::ApiError,
    processor::VoteProcessor,
    store::Store,
    uploads::UploadStore,
    utils::parse_photo_id,
};

pub struct AppState {
    pub store: Arc<dyn Store>,
    pub uploads: UploadStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, uploads: UploadStore, config: AppConfig) -> Self {
        Self { store, uploads, config }
    }
}

#[derive(FromForm)]
pub struct PhotoUpload<'r> {
    pub title: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub file: Option<TempFile<'r>>,
}

impl PhotoUpload<'_> {
    fn submission(&self) -> PhotoSubmission {
        PhotoSubmission {
            title: self.title.clone(),
            author: self.author.clone(),
            email: self.email.clone(),
            file_name: self.file.as_ref()
                .and_then(|f| f.raw_name())
                .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string()),
        }
    }
}

#[get("/photos")]
pub async fn list_photos(state: &State<AppState>) -> Result<Json<Vec<Photo>>, ApiError> {
    VoteProcessor::list_photos(state.store.as_ref()).await.map(Json)
}

#[instrument(skip(state, upload))]
#[post("/photos", data = "<upload>")]
pub async fn submit_photo(
    state: &State<AppState>,
    upload: Result<Form<PhotoUpload<'_>>, Errors<'_>>,
) -> Result<Json<Photo>, ApiError> {
    let mut upload = upload
        .map_err(|e| {
            debug!("Rejected malformed upload form: {}", e);
            ApiError::Validation(ValidationError::MissingInput)
        })?
        .into_inner();

    let validated = VoteProcessor::validate(&upload.submission())?;
    let file = upload.file.as_mut().ok_or(ApiError::Validation(ValidationError::MissingInput))?;
    let src = state.uploads.save(file, &validated.extension).await?;

    match VoteProcessor::create_photo(state.store.as_ref(), validated, &src).await {
        Ok(photo) => Ok(Json(photo)),
        Err(e) => {
            state.uploads.remove(&src).await;
            Err(e)
        }
    }
}

#[instrument(skip(state, client), fields(ip = %client.ip))]
#[put("/photos/vote/<id>")]
pub async fn vote(
    state: &State<AppState>,
    id: &str,
    client: ClientInfo,
) -> Result<Json<VoteResponse>, ApiError> {
    let photo_id = parse_photo_id(id)?;
    VoteProcessor::cast_vote(state.store.as_ref(), photo_id, &client.ip).await?;
    Ok(Json(VoteResponse::ok()))
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[get("/<path..>")]
pub async fn uploaded_file(path: PathBuf, state: &State<AppState>) -> Option<NamedFile> {
    NamedFile::open(state.uploads.dir().join(path)).await.ok()
}
