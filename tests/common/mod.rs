#![allow(dead_code)]

use std::sync::Mutex;

use agenda::api::AppointmentsApi;
use agenda::error::AppError;
use agenda::models::{Appointment, AppointmentInput};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(AppointmentInput),
    Update(i64, AppointmentInput),
    Delete(i64),
}

#[derive(Debug, Clone)]
pub enum Failure {
    Rejected { status: u16, message: Option<String> },
    Unreadable,
}

impl Failure {
    fn to_error(&self) -> AppError {
        match self {
            Failure::Rejected { status, message } => AppError::Rejected {
                status: *status,
                message: message.clone(),
            },
            Failure::Unreadable => AppError::Decode("unexpected body".to_string()),
        }
    }
}

/// In-memory stand-in for the appointments API that records every call.
#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    listing: Vec<Appointment>,
    list_failure: Option<Failure>,
    create_failure: Option<Failure>,
    update_failure: Option<Failure>,
    delete_failure: Option<Failure>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, listing: Vec<Appointment>) -> Self {
        self.listing = listing;
        self
    }

    pub fn failing_list(mut self, failure: Failure) -> Self {
        self.list_failure = Some(failure);
        self
    }

    pub fn failing_create(mut self, failure: Failure) -> Self {
        self.create_failure = Some(failure);
        self
    }

    pub fn failing_update(mut self, failure: Failure) -> Self {
        self.update_failure = Some(failure);
        self
    }

    pub fn failing_delete(mut self, failure: Failure) -> Self {
        self.delete_failure = Some(failure);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AppointmentsApi for RecordingApi {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.record(Call::List);
        match &self.list_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.listing.clone()),
        }
    }

    async fn create_appointment(&self, input: &AppointmentInput) -> Result<(), AppError> {
        self.record(Call::Create(input.clone()));
        match &self.create_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }

    async fn update_appointment(&self, id: i64, input: &AppointmentInput) -> Result<(), AppError> {
        self.record(Call::Update(id, input.clone()));
        match &self.update_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }

    async fn delete_appointment(&self, id: i64) -> Result<(), AppError> {
        self.record(Call::Delete(id));
        match &self.delete_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

pub fn appointment(id: i64, name: &str, date: &str, location: &str) -> Appointment {
    Appointment {
        id,
        name: name.to_string(),
        date: date.to_string(),
        location: location.to_string(),
    }
}
