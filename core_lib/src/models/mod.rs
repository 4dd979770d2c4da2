pub mod contact;
pub mod request;
pub mod status;

pub use contact::{ContactSubmission, ContactSubmissionCreate, Interest, NewContactSubmission, SubmissionStatus};
pub use request::{ApiResponse, ErrorDetails};
pub use status::{StatusCheck, StatusCheckCreate};
