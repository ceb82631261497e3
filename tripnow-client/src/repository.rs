use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info, warn};
use tripnow_core::{IdentityProvider, ReservationApi, TransportError};
use tripnow_shared::{CreateReservationRequest, Reservation};

pub const MSG_NO_RESERVATIONS: &str = "no reservations exist yet";
pub const MSG_LOAD_FAILED: &str = "failed to load reservations";
pub const MSG_CREATE_FAILED: &str = "failed to create reservation";
pub const MSG_GET_FAILED: &str = "failed to retrieve reservation";

/// View-model for the reservation list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryState {
    /// Server order is preserved
    pub reservations: Vec<Reservation>,
    pub loading: bool,
    pub error: Option<String>,
    pub total_reservations: usize,
}

/// Owns reservation list state and mediates every call to the API.
///
/// State is only written through the operations below. Consumers read
/// snapshots or subscribe to changes. Overlapping operations are not
/// serialized: whichever response lands last decides the state.
#[derive(Clone)]
pub struct ReservationRepository {
    api: Arc<dyn ReservationApi>,
    identity: Arc<IdentityProvider>,
    state: Arc<watch::Sender<RepositoryState>>,
}

impl ReservationRepository {
    pub fn new(api: Arc<dyn ReservationApi>, identity: Arc<IdentityProvider>) -> Self {
        let (state, _) = watch::channel(RepositoryState::default());
        Self {
            api,
            identity,
            state: Arc::new(state),
        }
    }

    pub fn snapshot(&self) -> RepositoryState {
        self.state.borrow().clone()
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.state.borrow().reservations.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn total_reservations(&self) -> usize {
        self.state.borrow().total_reservations
    }

    /// Receiver notified after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<RepositoryState> {
        self.state.subscribe()
    }

    pub fn session_identifier(&self) -> String {
        self.identity.identifier()
    }

    /// Reload the list scoped to this profile's session identifier.
    pub async fn fetch_list(&self) {
        self.fetch_page(1, 10).await
    }

    /// Paging arguments are accepted for forward compatibility; the list
    /// endpoint does not take them yet.
    pub async fn fetch_page(&self, _page: u32, _page_size: u32) {
        self.begin();
        let key = self.identity.identifier();

        match self.api.list_by_idempotency_key(&key).await {
            Ok(reservations) if reservations.is_empty() => {
                info!("No reservations found for session");
                self.settle_empty(MSG_NO_RESERVATIONS);
            }
            Ok(reservations) => {
                info!("Loaded {} reservations", reservations.len());
                self.state.send_modify(|state| {
                    state.total_reservations = reservations.len();
                    state.reservations = reservations;
                    state.error = None;
                    state.loading = false;
                });
            }
            Err(TransportError::NotFound) => {
                warn!("Reservation list not found for session");
                self.settle_empty(MSG_NO_RESERVATIONS);
            }
            Err(e) => {
                error!("Error fetching reservations: {}", e);
                self.settle_empty(MSG_LOAD_FAILED);
            }
        }
    }

    /// Submit a new reservation and reload the list on success.
    ///
    /// The request's idempotency key is always replaced with the session
    /// identifier. A failure keeps the current list on screen.
    pub async fn create(
        &self,
        mut request: CreateReservationRequest,
    ) -> Result<Reservation, TransportError> {
        self.begin();
        request.idempotency_key = self.identity.identifier();

        match self.api.create(&request).await {
            Ok(created) => {
                info!("Created reservation {}", created.id);
                self.fetch_list().await;
                Ok(created)
            }
            Err(e) => {
                error!("Error creating reservation: {}", e);
                self.state.send_modify(|state| {
                    state.error = Some(MSG_CREATE_FAILED.to_string());
                    state.loading = false;
                });
                Err(e)
            }
        }
    }

    /// Fetch one reservation, refreshing its list entry if it is loaded.
    pub async fn get_by_id(&self, id: i64) -> Result<Reservation, TransportError> {
        self.begin();

        match self.api.get_by_id(id).await {
            Ok(reservation) => {
                self.state.send_modify(|state| {
                    if let Some(entry) = state.reservations.iter_mut().find(|r| r.id == reservation.id) {
                        *entry = reservation.clone();
                    }
                    state.loading = false;
                });
                Ok(reservation)
            }
            Err(e) => {
                error!("Error fetching reservation {}: {}", id, e);
                self.state.send_modify(|state| {
                    state.error = Some(MSG_GET_FAILED.to_string());
                    state.loading = false;
                });
                Err(e)
            }
        }
    }

    /// Drop loaded data and any error. `loading` is left alone.
    pub fn clear(&self) {
        self.state.send_modify(|state| {
            state.reservations.clear();
            state.error = None;
            state.total_reservations = 0;
        });
    }

    fn begin(&self) {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    fn settle_empty(&self, message: &str) {
        self.state.send_modify(|state| {
            state.reservations.clear();
            state.total_reservations = 0;
            state.error = Some(message.to_string());
            state.loading = false;
        });
    }
}
