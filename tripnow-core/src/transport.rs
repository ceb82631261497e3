use async_trait::async_trait;
use tripnow_shared::{CreateReservationRequest, Reservation};

/// Failures reported by a reservations transport.
///
/// Only `NotFound` carries meaning for callers; the rest are reported as a
/// generic failure of whatever operation was running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Resource not found")]
    NotFound,

    #[error("Server responded with status {status}")]
    Status { status: u16 },

    #[error("Network failure: {0}")]
    Network(String),

    #[error("Malformed payload: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::NotFound)
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Client side of the reservations REST API.
#[async_trait]
pub trait ReservationApi: Send + Sync {
    /// `GET /Reservations/by-idempotency-key/{key}`
    async fn list_by_idempotency_key(&self, key: &str) -> TransportResult<Vec<Reservation>>;

    /// `POST /Reservations/create`
    async fn create(&self, request: &CreateReservationRequest) -> TransportResult<Reservation>;

    /// `GET /Reservations/{id}`
    async fn get_by_id(&self, id: i64) -> TransportResult<Reservation>;
}

/// Request paths relative to the API base URL.
pub mod routes {
    pub const CREATE: &str = "/Reservations/create";

    pub fn by_idempotency_key(key: &str) -> String {
        format!("/Reservations/by-idempotency-key/{}", key)
    }

    pub fn by_id(id: i64) -> String {
        format!("/Reservations/{}", id)
    }
}
