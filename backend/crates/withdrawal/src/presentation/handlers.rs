//! HTTP Handlers

use axum::Json;

use crate::application::{CalculateWithdrawalInput, CalculateWithdrawalUseCase};
use crate::error::WithdrawalResult;
use crate::presentation::dto::{WithdrawalRequest, WithdrawalResponse};

/// POST /api/saque
pub async fn calculate_withdrawal(
    request: WithdrawalRequest,
) -> WithdrawalResult<Json<WithdrawalResponse>> {
    let use_case = CalculateWithdrawalUseCase::new();
    let output = use_case.execute(CalculateWithdrawalInput {
        valor: request.valor,
    })?;

    Ok(Json(WithdrawalResponse::from(&output.breakdown)))
}
