pub mod error;
pub mod models;
pub mod validation;
pub mod user_info;

pub use error::{ErrorCode, ErrorResponse};
pub use models::*;
pub use validation::*;
pub use user_info::*;
