pub mod config;
pub mod notify;
