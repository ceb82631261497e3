//! Derived display values for the reservation list.

use std::fmt;

use tripnow_shared::format::{country_name, format_date, DateFormat};
use tripnow_shared::{Reservation, ReservationStatus};

/// CSS class for a status badge. Unknown statuses look pending.
pub fn status_class(status: &ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::PendingRiskCheck => "status-pending",
        ReservationStatus::Approved => "status-approved",
        ReservationStatus::Rejected => "status-rejected",
        ReservationStatus::Unknown(_) => "status-pending",
    }
}

pub fn status_label(status: &ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::PendingRiskCheck => "PENDING_RISK_CHECK",
        ReservationStatus::Approved => "APPROVED",
        ReservationStatus::Rejected => "REJECTED",
        ReservationStatus::Unknown(_) => "unknown",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket a 0-100 risk score. Each bucket includes its lower bound.
pub fn risk_level(score: f64) -> RiskLevel {
    if score < 40.0 {
        RiskLevel::Low
    } else if score < 70.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// One rendered line of the reservation table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRow {
    pub id: i64,
    pub customer_email: String,
    pub country: String,
    pub travelers: i32,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub created: String,
}

impl From<&Reservation> for ReservationRow {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            customer_email: reservation.customer_email.expose().clone(),
            country: country_name(&reservation.trip_country),
            travelers: reservation.amount,
            status_label: status_label(&reservation.status),
            status_class: status_class(&reservation.status),
            risk_score: reservation.risk_score,
            risk_level: risk_level(reservation.risk_score),
            created: format_date(&reservation.created_at, DateFormat::Short),
        }
    }
}
