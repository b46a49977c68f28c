pub mod cache;
pub mod envelope;
pub mod error;
pub mod resource;
