use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::pii::Masked;

/// Risk check status assigned by the backend.
///
/// Anything outside the three known values is kept as `Unknown` instead of
/// failing the whole payload, so display code can fall back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    PendingRiskCheck,
    Approved,
    Rejected,
    Unknown(String),
}

impl ReservationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReservationStatus::PendingRiskCheck => "PENDING_RISK_CHECK",
            ReservationStatus::Approved => "APPROVED",
            ReservationStatus::Rejected => "REJECTED",
            ReservationStatus::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ReservationStatus::Unknown(_))
    }
}

impl From<String> for ReservationStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PENDING_RISK_CHECK" => ReservationStatus::PendingRiskCheck,
            "APPROVED" => ReservationStatus::Approved,
            "REJECTED" => ReservationStatus::Rejected,
            _ => ReservationStatus::Unknown(raw),
        }
    }
}

impl From<ReservationStatus> for String {
    fn from(status: ReservationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trip booking as returned by the reservations API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub customer_email: Masked<String>,
    pub trip_country: String,
    /// Number of travelers
    pub amount: i32,
    pub status: ReservationStatus,
    pub risk_score: f64,
    pub idempotency_key: String,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /Reservations/create`.
///
/// `idempotency_key` is overwritten by the repository right before sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub customer_email: Masked<String>,
    pub trip_country: String,
    pub amount: i32,
    #[serde(default)]
    pub idempotency_key: String,
}

impl CreateReservationRequest {
    pub fn new(customer_email: impl Into<String>, trip_country: impl Into<String>, amount: i32) -> Self {
        Self {
            customer_email: Masked(customer_email.into()),
            trip_country: trip_country.into(),
            amount,
            idempotency_key: String::new(),
        }
    }
}

// The backend may emit timestamps without an offset; those are taken as UTC.
fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}
