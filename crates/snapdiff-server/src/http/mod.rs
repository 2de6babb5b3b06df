pub mod compare;
pub mod error_response;
pub mod health;
pub mod request_tracing;
pub mod upload;
