pub mod format;
pub mod models;
pub mod pii;

pub use models::{
    ApiResponse, CreateReservationRequest, Reservation, ReservationStatus,
    ReservationsListResponse,
};
pub use pii::Masked;
