//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - HTTP rendering of those errors (behind the `axum` feature)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all bounded contexts.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
