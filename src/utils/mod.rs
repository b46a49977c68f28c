pub mod config;
pub mod state;
pub mod ttl;
pub mod upstream;
