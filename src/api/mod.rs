pub mod dto;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::models::{Appointment, AppointmentInput};

/// The remote appointments resource.
#[async_trait]
pub trait AppointmentsApi: Send + Sync {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError>;
    async fn create_appointment(&self, input: &AppointmentInput) -> Result<(), AppError>;
    async fn update_appointment(&self, id: i64, input: &AppointmentInput) -> Result<(), AppError>;
    /// The response status is not inspected; only transport failures are reported.
    async fn delete_appointment(&self, id: i64) -> Result<(), AppError>;
}

pub struct AppointmentsHttpClient {
    client: Client,
    config: ApiConfig,
}

impl AppointmentsHttpClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }
}

fn rejected(response: &Response, what: &str) -> AppError {
    let status = response.status();
    warn!("Appointments API rejected {}: {}", what, status);
    AppError::Rejected {
        status: status.as_u16(),
        message: None,
    }
}

#[async_trait]
impl AppointmentsApi for AppointmentsHttpClient {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        let url = self.config.appointments_url();
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(rejected(&response, "list"));
        }

        let body_text = response.text().await?;
        serde_json::from_str::<Vec<Appointment>>(&body_text).map_err(|e| {
            tracing::error!("Failed to parse appointments: {}", e);
            AppError::Decode(format!("Failed to parse appointments: {}", e))
        })
    }

    async fn create_appointment(&self, input: &AppointmentInput) -> Result<(), AppError> {
        let url = self.config.appointments_url();
        debug!("POST {} date={}", url, input.date);

        let response = self.client.post(&url).json(input).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body_text = response.text().await?;
        let payload: dto::ErrorPayload = serde_json::from_str(&body_text).map_err(|e| {
            warn!("Unreadable error body for create ({}): {}", status, e);
            AppError::Decode(format!("Failed to parse error body: {}", e))
        })?;

        warn!("Appointments API rejected create: {} {}", status, body_text);
        Err(AppError::Rejected {
            status: status.as_u16(),
            message: payload.message(),
        })
    }

    async fn update_appointment(&self, id: i64, input: &AppointmentInput) -> Result<(), AppError> {
        let url = self.config.appointment_url(id);
        debug!("PUT {}", url);

        let response = self.client.put(&url).json(input).send().await?;
        if !response.status().is_success() {
            return Err(rejected(&response, "update"));
        }
        Ok(())
    }

    async fn delete_appointment(&self, id: i64) -> Result<(), AppError> {
        let url = self.config.appointment_url(id);
        let response = self.client.delete(&url).send().await?;
        debug!("DELETE {} -> {}", url, response.status());
        Ok(())
    }
}
