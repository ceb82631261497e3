use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use tripnow_core::transport::routes;
use tripnow_core::{ReservationApi, TransportError, TransportResult};
use tripnow_shared::{CreateReservationRequest, Reservation};

use crate::app_config::ApiConfig;

/// `reqwest`-backed transport for the reservations API.
#[derive(Clone)]
pub struct HttpReservationApi {
    client: Client,
    base_url: String,
}

impl HttpReservationApi {
    pub fn new(config: &ApiConfig) -> TransportResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> TransportResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{} responded with {}", response.url(), status);
        if status == StatusCode::NOT_FOUND {
            return Err(TransportError::NotFound);
        }
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ReservationApi for HttpReservationApi {
    async fn list_by_idempotency_key(&self, key: &str) -> TransportResult<Vec<Reservation>> {
        let request = self.client.get(self.url(&routes::by_idempotency_key(key)));
        // A `null` body means the same as an empty list.
        let reservations: Option<Vec<Reservation>> = self.send(request).await?;
        Ok(reservations.unwrap_or_default())
    }

    async fn create(&self, request: &CreateReservationRequest) -> TransportResult<Reservation> {
        let request = self.client.post(self.url(routes::CREATE)).json(request);
        self.send(request).await
    }

    async fn get_by_id(&self, id: i64) -> TransportResult<Reservation> {
        let request = self.client.get(self.url(&routes::by_id(id)));
        self.send(request).await
    }
}
