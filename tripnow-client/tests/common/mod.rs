#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::oneshot;
use tripnow_client::ReservationRepository;
use tripnow_core::{IdentityProvider, MemoryStore, ReservationApi, TransportError, TransportResult};
use tripnow_shared::{CreateReservationRequest, Masked, Reservation, ReservationStatus};

pub enum Reply<T> {
    Ready(TransportResult<T>),
    Gated(oneshot::Receiver<TransportResult<T>>),
}

/// Scripted in-process stand-in for the reservations API.
pub struct MockApi {
    list_replies: Mutex<VecDeque<Reply<Vec<Reservation>>>>,
    list_default: Mutex<TransportResult<Vec<Reservation>>>,
    create_replies: Mutex<VecDeque<TransportResult<Reservation>>>,
    get_replies: Mutex<VecDeque<TransportResult<Reservation>>>,
    list_calls: AtomicUsize,
    list_keys: Mutex<Vec<String>>,
    created: Mutex<Vec<CreateReservationRequest>>,
    get_ids: Mutex<Vec<i64>>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            list_replies: Mutex::new(VecDeque::new()),
            list_default: Mutex::new(Ok(Vec::new())),
            create_replies: Mutex::new(VecDeque::new()),
            get_replies: Mutex::new(VecDeque::new()),
            list_calls: AtomicUsize::new(0),
            list_keys: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            get_ids: Mutex::new(Vec::new()),
        })
    }

    /// Reply used once the scripted list replies run out.
    pub fn set_list(&self, reply: TransportResult<Vec<Reservation>>) {
        *self.list_default.lock().unwrap() = reply;
    }

    pub fn push_list(&self, reply: TransportResult<Vec<Reservation>>) {
        self.list_replies.lock().unwrap().push_back(Reply::Ready(reply));
    }

    /// Queue a list reply that only resolves once the returned sender fires.
    pub fn gate_list(&self) -> oneshot::Sender<TransportResult<Vec<Reservation>>> {
        let (tx, rx) = oneshot::channel();
        self.list_replies.lock().unwrap().push_back(Reply::Gated(rx));
        tx
    }

    pub fn push_create(&self, reply: TransportResult<Reservation>) {
        self.create_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_get(&self, reply: TransportResult<Reservation>) {
        self.get_replies.lock().unwrap().push_back(reply);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn list_keys(&self) -> Vec<String> {
        self.list_keys.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<CreateReservationRequest> {
        self.created.lock().unwrap().clone()
    }

    pub fn get_ids(&self) -> Vec<i64> {
        self.get_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReservationApi for MockApi {
    async fn list_by_idempotency_key(&self, key: &str) -> TransportResult<Vec<Reservation>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_keys.lock().unwrap().push(key.to_string());

        let scripted = self.list_replies.lock().unwrap().pop_front();
        match scripted {
            Some(Reply::Ready(reply)) => reply,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Network("gate dropped".into()))),
            None => self.list_default.lock().unwrap().clone(),
        }
    }

    async fn create(&self, request: &CreateReservationRequest) -> TransportResult<Reservation> {
        self.created.lock().unwrap().push(request.clone());
        let scripted = self.create_replies.lock().unwrap().pop_front();
        scripted.unwrap_or(Err(TransportError::Status { status: 500 }))
    }

    async fn get_by_id(&self, id: i64) -> TransportResult<Reservation> {
        self.get_ids.lock().unwrap().push(id);
        let scripted = self.get_replies.lock().unwrap().pop_front();
        scripted.unwrap_or(Err(TransportError::NotFound))
    }
}

pub fn reservation(id: i64, status: ReservationStatus) -> Reservation {
    let created = Utc.with_ymd_and_hms(2024, 12, 15, 10, 0, 0).unwrap();
    Reservation {
        id,
        customer_email: Masked(format!("guest{}@example.com", id)),
        trip_country: "ES".to_string(),
        amount: 2,
        status,
        risk_score: 25.5,
        idempotency_key: "test-uuid".to_string(),
        created_at: created,
        updated_at: created,
    }
}

pub fn repository(api: Arc<MockApi>) -> ReservationRepository {
    let identity = Arc::new(IdentityProvider::new(Arc::new(MemoryStore::new())));
    ReservationRepository::new(api, identity)
}

/// Let spawned tasks run until they block.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
