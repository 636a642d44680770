pub mod errors;
pub mod mapper;
pub mod zoom_policy;
