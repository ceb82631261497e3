pub mod detail;
pub mod display;
pub mod form;
pub mod repository;
pub mod view;

pub use detail::ReservationDetailView;
pub use display::{risk_level, status_class, status_label, ReservationRow, RiskLevel};
pub use form::{CreateReservationForm, ReservationFormFields, ValidationError};
pub use repository::{RepositoryState, ReservationRepository};
pub use view::ReservationListView;
