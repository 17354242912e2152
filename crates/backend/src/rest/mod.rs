//! Adapter for the managed backend's request/response row API.

mod client;
mod config;

pub use client::RestBackend;
pub use config::RestConfig;
