//! Domain Value Objects
//!
//! Immutable value types for the withdrawal domain.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

// ============================================================================
// Denomination
// ============================================================================

/// Banknote face value dispensed by the ATM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Denomination {
    Hundred,
    Fifty,
    Twenty,
    Ten,
    Five,
    Two,
}

impl Denomination {
    pub const COUNT: usize = 6;

    /// Every denomination, strictly descending by face value.
    ///
    /// The greedy breakdown is only optimal because this set is canonical.
    pub const ALL: [Denomination; Self::COUNT] = [
        Denomination::Hundred,
        Denomination::Fifty,
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::Two,
    ];

    pub const fn value(&self) -> u64 {
        match self {
            Denomination::Hundred => 100,
            Denomination::Fifty => 50,
            Denomination::Twenty => 20,
            Denomination::Ten => 10,
            Denomination::Five => 5,
            Denomination::Two => 2,
        }
    }

    /// Position in [`Denomination::ALL`]
    pub const fn index(&self) -> usize {
        match self {
            Denomination::Hundred => 0,
            Denomination::Fifty => 1,
            Denomination::Twenty => 2,
            Denomination::Ten => 3,
            Denomination::Five => 4,
            Denomination::Two => 5,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ============================================================================
// Withdrawal Amount
// ============================================================================

/// Rejection reasons for a candidate withdrawal amount.
///
/// Checked in declaration order; the first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Campo 'valor' é obrigatório")]
    Missing,

    #[error("Campo 'valor' deve ser um número")]
    NotANumber,

    #[error("Campo 'valor' deve ser um número inteiro")]
    NotAnInteger,

    #[error("Campo 'valor' deve ser um número positivo")]
    NotPositive,
}

/// Admissible withdrawal amount (always > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WithdrawalAmount(u64);

impl WithdrawalAmount {
    pub fn new(value: u64) -> Result<Self, AmountError> {
        if value == 0 {
            return Err(AmountError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Validate an untyped candidate as decoded from a JSON body.
    ///
    /// `None` and JSON `null` both count as missing. Floats with a zero
    /// fractional part (`100.0`) are admitted as integers. Integral values
    /// beyond `u64` cannot be held exactly and are rejected as non-integers.
    pub fn parse(candidate: Option<&Value>) -> Result<Self, AmountError> {
        let value = match candidate {
            None | Some(Value::Null) => return Err(AmountError::Missing),
            Some(value) => value,
        };

        let Value::Number(number) = value else {
            return Err(AmountError::NotANumber);
        };

        if let Some(unsigned) = number.as_u64() {
            return Self::new(unsigned);
        }
        if number.is_i64() {
            // as_u64 failed, so this is negative
            return Err(AmountError::NotPositive);
        }

        let Some(float) = number.as_f64() else {
            return Err(AmountError::NotANumber);
        };
        if float.fract() != 0.0 {
            return Err(AmountError::NotAnInteger);
        }
        if float <= 0.0 {
            return Err(AmountError::NotPositive);
        }
        if float >= u64::MAX as f64 {
            return Err(AmountError::NotAnInteger);
        }

        Self::new(float as u64)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WithdrawalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
