//! Core credvault library (config, session storage, API client).

pub mod api;
pub mod config;
pub mod session;
