//! Domain Services
//!
//! Pure breakdown logic for withdrawals.

use super::entities::NoteBreakdown;
use super::value_objects::{Denomination, WithdrawalAmount};
use crate::error::{WithdrawalError, WithdrawalResult};

/// Greedy breakdown: take as many of each note as fit, largest first.
///
/// Never backtracks, so an amount the greedy walk leaves a remainder on is
/// reported as [`WithdrawalError::Unrepresentable`] even when another
/// combination exists (8 = 2+2+2+2).
pub fn calculate_breakdown(amount: WithdrawalAmount) -> WithdrawalResult<NoteBreakdown> {
    let mut breakdown = NoteBreakdown::new();
    let mut remaining = amount.value();

    for denomination in Denomination::ALL {
        let count = remaining / denomination.value();
        breakdown.set_count(denomination, count);
        remaining -= count * denomination.value();
    }

    if remaining > 0 {
        return Err(WithdrawalError::Unrepresentable {
            amount: amount.value(),
        });
    }

    Ok(breakdown)
}
