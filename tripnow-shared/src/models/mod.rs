pub mod api;
pub mod reservation;

pub use api::{ApiResponse, ReservationsListResponse};
pub use reservation::{CreateReservationRequest, Reservation, ReservationStatus};
