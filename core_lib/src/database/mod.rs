pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::{get_database_pool, DatabaseManager};
pub use repository::{
    ContactRepository, StatusCheckRepository, StatusRepository, SubmissionRepository,
    DEFAULT_STATUS_CHECK_LIMIT, DEFAULT_SUBMISSION_LIMIT,
};
pub use schema::ensure_schema;
