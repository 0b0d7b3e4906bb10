//! API DTOs (Data Transfer Objects)

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::NoteBreakdown;
use crate::domain::value_objects::Denomination;

/// Request for POST /api/saque
///
/// `valor` stays untyped so the use case can tell a missing field from a
/// string or a fraction. Built from a JSON object body by the
/// `FromRequest` impl in `presentation::extractor`.
#[derive(Debug, Clone, Default)]
pub struct WithdrawalRequest {
    pub valor: Option<Value>,
}

/// Response for POST /api/saque
///
/// Field order is the serialized key order: largest note first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithdrawalResponse {
    #[serde(rename = "100")]
    pub notes_100: u64,
    #[serde(rename = "50")]
    pub notes_50: u64,
    #[serde(rename = "20")]
    pub notes_20: u64,
    #[serde(rename = "10")]
    pub notes_10: u64,
    #[serde(rename = "5")]
    pub notes_5: u64,
    #[serde(rename = "2")]
    pub notes_2: u64,
}

impl From<&NoteBreakdown> for WithdrawalResponse {
    fn from(breakdown: &NoteBreakdown) -> Self {
        Self {
            notes_100: breakdown.count(Denomination::Hundred),
            notes_50: breakdown.count(Denomination::Fifty),
            notes_20: breakdown.count(Denomination::Twenty),
            notes_10: breakdown.count(Denomination::Ten),
            notes_5: breakdown.count(Denomination::Five),
            notes_2: breakdown.count(Denomination::Two),
        }
    }
}
