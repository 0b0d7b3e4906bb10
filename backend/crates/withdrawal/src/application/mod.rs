//! Application Layer - Use Cases
//!
//! Orchestrates domain validation and the breakdown service.

pub mod calculate_withdrawal;

// Re-exports
pub use calculate_withdrawal::{
    CalculateWithdrawalInput, CalculateWithdrawalOutput, CalculateWithdrawalUseCase,
};
