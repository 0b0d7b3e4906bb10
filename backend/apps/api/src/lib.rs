//! API application
//!
//! Router assembly and process configuration shared by the binary and
//! its tests.

pub mod app;
pub mod config;

pub use app::build_app;
pub use config::ApiConfig;
