use std::sync::Arc;
use backend::{
    build_rocket,
    config::AppConfig,
    queries::PgStore,
    routes::AppState,
    uploads::UploadStore,
};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::info;

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("📸 Starting photo contest server");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let config = AppConfig::from_secrets(&secret_store);
    let uploads = UploadStore::new(config.upload_dir.clone())
        .await
        .map_err(CustomError::new)?;

    info!("🖼️ Serving uploads from {}", config.upload_dir.display());

    let state = AppState::new(Arc::new(PgStore::new(pool)), uploads, config);

    Ok(build_rocket(state).into())
}
