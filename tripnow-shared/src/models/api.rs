use serde::{Deserialize, Serialize};

use super::reservation::Reservation;

/// Generic envelope used by envelope-style endpoints of the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub success: bool,
}

/// Paginated listing shape. The by-idempotency-key endpoint currently
/// returns a bare array, so the repository does not consume this yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsListResponse {
    pub reservations: Vec<Reservation>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}
