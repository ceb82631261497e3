use tracing::warn;
use tripnow_shared::Reservation;

use crate::repository::ReservationRepository;

pub const MSG_DETAIL_FAILED: &str = "could not load reservation details";

/// Reservation detail modal.
///
/// Keeps its own loading/error flags so a failed lookup can be shown inside
/// the modal, on top of the repository-level error.
pub struct ReservationDetailView {
    repository: ReservationRepository,
    is_open: bool,
    reservation_id: Option<i64>,
    reservation: Option<Reservation>,
    loading: bool,
    error: Option<String>,
}

impl ReservationDetailView {
    pub fn new(repository: ReservationRepository) -> Self {
        Self {
            repository,
            is_open: false,
            reservation_id: None,
            reservation: None,
            loading: false,
            error: None,
        }
    }

    pub async fn open(&mut self, id: i64) {
        self.is_open = true;
        self.reservation_id = Some(id);
        self.load().await;
    }

    /// Fetch the target reservation again.
    pub async fn load(&mut self) {
        let Some(id) = self.reservation_id else {
            return;
        };

        self.loading = true;
        self.error = None;
        self.reservation = None;

        match self.repository.get_by_id(id).await {
            Ok(reservation) => self.reservation = Some(reservation),
            Err(e) => {
                warn!("Detail view failed to load reservation {}: {}", id, e);
                self.error = Some(MSG_DETAIL_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn reservation_id(&self) -> Option<i64> {
        self.reservation_id
    }

    pub fn reservation(&self) -> Option<&Reservation> {
        self.reservation.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
