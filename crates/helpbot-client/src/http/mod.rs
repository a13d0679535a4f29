//! reqwest-backed implementation of the support API.
//!
//! All endpoint paths are joined onto the configured base URL
//! (default `http://localhost:8000/api/v1`).

mod admin;
mod api;
mod client;
mod config;

pub use client::HttpSupportClient;
pub use config::HttpConfig;
