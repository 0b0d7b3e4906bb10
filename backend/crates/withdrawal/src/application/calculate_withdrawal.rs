//! Calculate Withdrawal Use Case
//!
//! Validates the requested amount and breaks it down into banknotes.

use serde_json::Value;

use crate::domain::entities::NoteBreakdown;
use crate::domain::services::calculate_breakdown;
use crate::domain::value_objects::WithdrawalAmount;
use crate::error::WithdrawalResult;

/// Calculate withdrawal input
pub struct CalculateWithdrawalInput {
    /// Raw `valor` field; `None` when absent from the body
    pub valor: Option<Value>,
}

/// Calculate withdrawal output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateWithdrawalOutput {
    pub amount: WithdrawalAmount,
    pub breakdown: NoteBreakdown,
}

/// Calculate withdrawal use case
///
/// Stateless; safe to build per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateWithdrawalUseCase;

impl CalculateWithdrawalUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        input: CalculateWithdrawalInput,
    ) -> WithdrawalResult<CalculateWithdrawalOutput> {
        let amount = WithdrawalAmount::parse(input.valor.as_ref())?;
        let breakdown = calculate_breakdown(amount)?;

        tracing::info!(
            amount = amount.value(),
            total_notes = breakdown.total_notes(),
            "Withdrawal breakdown calculated"
        );

        Ok(CalculateWithdrawalOutput { amount, breakdown })
    }
}
