//! HTTP handlers and route table

pub mod contact;
pub mod health;
pub mod routes;
pub mod status;

pub use routes::create_routes;
