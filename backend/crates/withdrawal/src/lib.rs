//! Withdrawal (ATM cash dispensing) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Denominations, amount validation, greedy breakdown
//! - `application/` - Use cases
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Rules
//! - Notes available: 100, 50, 20, 10, 5, 2
//! - The amount must be a positive integer
//! - The breakdown uses the fewest notes; amounts the greedy walk cannot
//!   settle exactly are rejected with 400

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::NoteBreakdown;
pub use domain::services::calculate_breakdown;
pub use domain::value_objects::{AmountError, Denomination, WithdrawalAmount};
pub use error::{WithdrawalError, WithdrawalResult};
pub use presentation::router::withdrawal_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

#[cfg(test)]
mod tests;
