use garde::Validate;
use tokio::task::JoinHandle;
use tracing::debug;
use tripnow_core::TransportError;
use tripnow_shared::{CreateReservationRequest, Reservation};

use crate::repository::ReservationRepository;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid reservation form: {0}")]
    Invalid(#[from] garde::Report),
}

/// Raw input of the create-reservation form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ReservationFormFields {
    #[garde(email)]
    pub customer_email: String,
    #[garde(length(min = 2, max = 2))]
    pub trip_country: String,
    #[garde(required, range(min = 1))]
    pub amount: Option<i32>,
}

/// Create-reservation modal. Invalid input never reaches the repository.
pub struct CreateReservationForm {
    repository: ReservationRepository,
    is_open: bool,
    fields: ReservationFormFields,
}

impl CreateReservationForm {
    pub fn new(repository: ReservationRepository) -> Self {
        Self {
            repository,
            is_open: false,
            fields: ReservationFormFields::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.fields = ReservationFormFields::default();
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.fields = ReservationFormFields::default();
    }

    pub fn fields(&self) -> &ReservationFormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ReservationFormFields {
        &mut self.fields
    }

    /// Check the fields and build the request to send.
    pub fn validate(&self) -> Result<CreateReservationRequest, ValidationError> {
        self.fields.validate()?;
        Ok(CreateReservationRequest::new(
            self.fields.customer_email.clone(),
            self.fields.trip_country.clone(),
            self.fields.amount.unwrap_or_default(),
        ))
    }

    /// Send the reservation in the background and close the form.
    ///
    /// On invalid input nothing is sent and the form stays open.
    pub fn submit(
        &mut self,
    ) -> Result<JoinHandle<Result<Reservation, TransportError>>, ValidationError> {
        let request = self.validate()?;
        debug!("Submitting reservation for {}", request.trip_country);

        let repository = self.repository.clone();
        let pending = tokio::spawn(async move { repository.create(request).await });
        self.close();
        Ok(pending)
    }
}
