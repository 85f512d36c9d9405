pub mod processor;
pub mod routes;
pub mod store;
pub mod queries;
pub mod uploads;
pub mod cors;
pub mod error;
pub mod utils;
pub mod config;
pub mod catchers;
pub use shared::user_info;
pub use shared::{models::*, error::*, user_info::*};

use rocket::{Build, Rocket, catchers, routes};
use crate::{
    catchers::{bad_request, forbidden, internal_error, not_found, unprocessable},
    cors::CORS,
    routes::{all_options, list_photos, submit_photo, uploaded_file, vote, AppState},
};

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    let cors = CORS::new(state.config.allowed_origin.clone());

    rocket::build()
        .attach(cors)
        .manage(state)
        .mount("/api", routes![list_photos, submit_photo, vote, all_options])
        .mount("/uploads", routes![uploaded_file])
        .register(
            "/",
            catchers![bad_request, forbidden, not_found, unprocessable, internal_error],
        )
}
