use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::detail::ReservationDetailView;
use crate::form::CreateReservationForm;
use crate::repository::ReservationRepository;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(20);

/// Reservation list screen: periodic refresh plus the create and detail modals.
///
/// Every list load is fire-and-forget. A manual reload that overlaps a timer
/// reload is not deduplicated.
pub struct ReservationListView {
    repository: ReservationRepository,
    refresh_interval: Duration,
    refresh: Option<JoinHandle<()>>,
    create_form: CreateReservationForm,
    detail: ReservationDetailView,
}

impl ReservationListView {
    pub fn new(repository: ReservationRepository) -> Self {
        Self {
            create_form: CreateReservationForm::new(repository.clone()),
            detail: ReservationDetailView::new(repository.clone()),
            repository,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            refresh: None,
        }
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn repository(&self) -> &ReservationRepository {
        &self.repository
    }

    /// Load the list now and keep reloading it every refresh interval.
    ///
    /// Calling this on an active view does nothing.
    pub fn activate(&mut self) {
        if self.refresh.is_some() {
            return;
        }
        self.reload();

        let repository = self.repository.clone();
        let period = self.refresh_interval;
        self.refresh = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                debug!("Refresh tick, reloading reservations");
                let repository = repository.clone();
                tokio::spawn(async move { repository.fetch_list().await });
            }
        }));
        info!("Reservation list activated, refreshing every {:?}", period);
    }

    /// Stop the periodic refresh. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(refresh) = self.refresh.take() {
            refresh.abort();
            info!("Reservation list torn down");
        }
    }

    pub fn is_active(&self) -> bool {
        self.refresh.is_some()
    }

    /// Trigger a list load in the background.
    pub fn reload(&self) -> JoinHandle<()> {
        let repository = self.repository.clone();
        tokio::spawn(async move { repository.fetch_list().await })
    }

    pub fn open_create(&mut self) {
        self.create_form.open();
    }

    pub fn create_form(&self) -> &CreateReservationForm {
        &self.create_form
    }

    pub fn create_form_mut(&mut self) -> &mut CreateReservationForm {
        &mut self.create_form
    }

    pub async fn open_detail(&mut self, id: i64) {
        self.detail.open(id).await;
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    pub fn detail(&self) -> &ReservationDetailView {
        &self.detail
    }
}

impl Drop for ReservationListView {
    fn drop(&mut self) {
        self.teardown();
    }
}
