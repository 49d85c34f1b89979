pub mod api;
pub mod request;
