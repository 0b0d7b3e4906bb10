//! Presentation Layer
//!
//! HTTP handlers, request extraction and DTOs for the API.

pub mod dto;
pub mod extractor;
pub mod handlers;
pub mod router;
