//! Unit tests for withdrawal crate

#[cfg(test)]
mod breakdown_tests {
    use crate::domain::services::calculate_breakdown;
    use crate::domain::value_objects::{Denomination, WithdrawalAmount};
    use crate::error::WithdrawalError;
    use proptest::prelude::*;
    use rstest::rstest;

    fn breakdown_of(value: u64) -> Result<[u64; Denomination::COUNT], WithdrawalError> {
        let amount = WithdrawalAmount::new(value).unwrap();
        let breakdown = calculate_breakdown(amount)?;
        Ok(Denomination::ALL.map(|d| breakdown.count(d)))
    }

    /// Fewest notes over every combination, by dynamic programming
    fn min_notes(value: u64) -> Option<u64> {
        let target = value as usize;
        let mut best: Vec<Option<u64>> = vec![None; target + 1];
        best[0] = Some(0);
        for amount in 1..=target {
            best[amount] = Denomination::ALL
                .iter()
                .map(|d| d.value() as usize)
                .filter(|&face| face <= amount)
                .filter_map(|face| best[amount - face])
                .min()
                .map(|notes| notes + 1);
        }
        best[target]
    }

    //                    100 50 20 10  5  2
    #[rstest]
    #[case(380, [3, 1, 1, 1, 0, 0])]
    #[case(100, [1, 0, 0, 0, 0, 0])]
    #[case(2, [0, 0, 0, 0, 0, 1])]
    #[case(127, [1, 0, 1, 0, 1, 1])]
    #[case(4, [0, 0, 0, 0, 0, 2])]
    #[case(50, [0, 1, 0, 0, 0, 0])]
    #[case(75, [0, 1, 1, 0, 1, 0])]
    #[case(9, [0, 0, 0, 0, 1, 2])]
    #[case(1000, [10, 0, 0, 0, 0, 0])]
    fn test_known_breakdowns(#[case] value: u64, #[case] expected: [u64; 6]) {
        assert_eq!(breakdown_of(value).unwrap(), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(8)]
    #[case(11)]
    #[case(13)]
    #[case(106)]
    fn test_unrepresentable_amounts(#[case] value: u64) {
        let err = breakdown_of(value).unwrap_err();
        assert!(matches!(err, WithdrawalError::Unrepresentable { amount } if amount == value));
        assert_eq!(
            err.to_string(),
            format!("Valor {value} não pode ser sacado com as cédulas disponíveis")
        );
    }

    proptest! {
        #[test]
        fn breakdown_sums_to_amount(value in 1u64..1_000_000_000) {
            let amount = WithdrawalAmount::new(value).unwrap();
            if let Ok(breakdown) = calculate_breakdown(amount) {
                prop_assert_eq!(breakdown.total_value(), value);
            }
        }

        #[test]
        fn representable_iff_last_digit_allows(value in 1u64..1_000_000_000) {
            let amount = WithdrawalAmount::new(value).unwrap();
            let unrepresentable = matches!(value % 10, 1 | 3 | 6 | 8);
            prop_assert_eq!(calculate_breakdown(amount).is_err(), unrepresentable);
        }

        #[test]
        fn greedy_uses_fewest_notes(value in 1u64..3_000) {
            let amount = WithdrawalAmount::new(value).unwrap();
            if let Ok(breakdown) = calculate_breakdown(amount) {
                prop_assert_eq!(Some(breakdown.total_notes()), min_notes(value));
            }
        }

        #[test]
        fn breakdown_is_idempotent(value in 1u64..1_000_000) {
            let amount = WithdrawalAmount::new(value).unwrap();
            let first = calculate_breakdown(amount).map_err(|e| e.to_string());
            let second = calculate_breakdown(amount).map_err(|e| e.to_string());
            prop_assert_eq!(first, second);
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use crate::application::{CalculateWithdrawalInput, CalculateWithdrawalUseCase};
    use crate::domain::value_objects::{AmountError, Denomination};
    use crate::error::WithdrawalError;
    use serde_json::{Value, json};

    fn execute(valor: Option<Value>) -> Result<u64, WithdrawalError> {
        CalculateWithdrawalUseCase::new()
            .execute(CalculateWithdrawalInput { valor })
            .map(|output| output.breakdown.total_value())
    }

    fn rejection(valor: Option<Value>) -> AmountError {
        match execute(valor) {
            Err(WithdrawalError::InvalidAmount(reason)) => reason,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(rejection(None), AmountError::Missing);
        assert_eq!(rejection(Some(Value::Null)), AmountError::Missing);
        assert_eq!(rejection(Some(json!("abc"))), AmountError::NotANumber);
        assert_eq!(rejection(Some(json!(100.5))), AmountError::NotAnInteger);
        assert_eq!(rejection(Some(json!(-0.5))), AmountError::NotAnInteger);
        assert_eq!(rejection(Some(json!(0))), AmountError::NotPositive);
        assert_eq!(rejection(Some(json!(-100))), AmountError::NotPositive);
    }

    #[test]
    fn test_admitted_amount_is_broken_down() {
        let output = CalculateWithdrawalUseCase::new()
            .execute(CalculateWithdrawalInput {
                valor: Some(json!(380)),
            })
            .unwrap();
        assert_eq!(output.amount.value(), 380);
        assert_eq!(output.breakdown.count(Denomination::Hundred), 3);
        assert_eq!(output.breakdown.total_notes(), 6);
    }

    #[test]
    fn test_unrepresentable_is_not_a_validation_error() {
        let err = execute(Some(json!(13))).unwrap_err();
        assert!(matches!(err, WithdrawalError::Unrepresentable { amount: 13 }));
    }
}

#[cfg(test)]
mod router_tests {
    use crate::presentation::router::withdrawal_router;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        Router::new().nest("/api", withdrawal_router())
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = create_test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post_json(body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/saque")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();
        let (status, text) = send(request).await;
        (status, serde_json::from_str(&text).unwrap())
    }

    #[tokio::test]
    async fn test_success_body_in_denomination_order() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/saque")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"valor": 380}"#))
            .unwrap();

        let (status, text) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, r#"{"100":3,"50":1,"20":1,"10":1,"5":0,"2":0}"#);
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let cases = [
            (r#"{}"#, "Campo 'valor' é obrigatório"),
            (r#"{"valor": null}"#, "Campo 'valor' é obrigatório"),
            (r#"{"valor": "100"}"#, "Campo 'valor' deve ser um número"),
            (r#"{"valor": 100.5}"#, "Campo 'valor' deve ser um número inteiro"),
            (r#"{"valor": 0}"#, "Campo 'valor' deve ser um número positivo"),
            (r#"{"valor": -50}"#, "Campo 'valor' deve ser um número positivo"),
        ];

        for (body, message) in cases {
            let (status, json) = post_json(body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["error"], message, "body: {body}");
        }
    }

    #[tokio::test]
    async fn test_unrepresentable_amount() {
        let (status, json) = post_json(r#"{"valor": 11}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["error"],
            "Valor 11 não pode ser sacado com as cédulas disponíveis"
        );
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, json) = post_json(r#"{"valor": "#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Corpo da requisição inválido");
    }

    #[tokio::test]
    async fn test_missing_content_type_reads_as_empty_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/saque")
            .body(Body::from(r#"{"valor": 100}"#))
            .unwrap();

        let (status, text) = send(request).await;
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Campo 'valor' é obrigatório");
    }

    #[tokio::test]
    async fn test_non_object_body_is_invalid() {
        for body in ["[100]", "[]", r#""100""#, "100", "null"] {
            let (status, json) = post_json(body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["error"], "Corpo da requisição inválido", "body: {body}");
        }
    }

    #[tokio::test]
    async fn test_empty_json_body_reads_as_empty_object() {
        let (status, json) = post_json("").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Campo 'valor' é obrigatório");
    }

    #[tokio::test]
    async fn test_empty_body_without_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/saque")
            .body(Body::empty())
            .unwrap();

        let (status, text) = send(request).await;
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Campo 'valor' é obrigatório");
    }
}
