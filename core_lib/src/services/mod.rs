pub mod contact_service;
pub mod status_service;

pub use contact_service::ContactService;
pub use status_service::StatusService;
