//! Withdrawal Error Types
//!
//! This module provides withdrawal-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::AmountError;

/// Withdrawal-specific result type alias
pub type WithdrawalResult<T> = Result<T, WithdrawalError>;

/// Withdrawal-specific error variants
#[derive(Debug, Error)]
pub enum WithdrawalError {
    /// Candidate amount failed validation
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    /// Greedy breakdown left a remainder
    #[error("Valor {amount} não pode ser sacado com as cédulas disponíveis")]
    Unrepresentable { amount: u64 },

    /// Request body could not be decoded
    #[error("Corpo da requisição inválido")]
    InvalidBody(#[source] JsonRejection),
}

impl WithdrawalError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WithdrawalError::InvalidAmount(_)
            | WithdrawalError::Unrepresentable { .. }
            | WithdrawalError::InvalidBody(_) => ErrorKind::BadRequest,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WithdrawalError::InvalidBody(rejection) => {
                tracing::warn!(detail = %rejection.body_text(), "Malformed withdrawal request body");
            }
            WithdrawalError::Unrepresentable { amount } => {
                tracing::debug!(amount, "Withdrawal amount not representable");
            }
            WithdrawalError::InvalidAmount(reason) => {
                tracing::debug!(error = %reason, "Withdrawal amount rejected");
            }
        }
    }
}

impl From<WithdrawalError> for AppError {
    fn from(err: WithdrawalError) -> Self {
        let app_error = err.to_app_error();
        match err {
            WithdrawalError::InvalidBody(rejection) => app_error.with_source(rejection),
            WithdrawalError::InvalidAmount(reason) => app_error.with_source(reason),
            WithdrawalError::Unrepresentable { .. } => app_error,
        }
    }
}

impl IntoResponse for WithdrawalError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
