use std::sync::Arc;

use tracing::{info, warn};

use crate::api::AppointmentsApi;
use crate::error::AppError;
use crate::messages;
use crate::models::Draft;

/// Form that creates a new appointment.
pub struct RegistrationScreen {
    api: Arc<dyn AppointmentsApi>,
    draft: Draft,
    error_message: Option<String>,
    success_message: Option<String>,
}

impl RegistrationScreen {
    pub fn new(api: Arc<dyn AppointmentsApi>) -> Self {
        Self {
            api,
            draft: Draft::default(),
            error_message: None,
            success_message: None,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    /// Expects a local date-time such as `2024-01-02T09:05`.
    pub fn set_date(&mut self, value: impl Into<String>) {
        self.draft.date = value.into();
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.draft.location = value.into();
    }

    /// Sends the draft as a new appointment. The draft is kept on success.
    pub async fn submit(&mut self) -> Result<(), AppError> {
        let input = match self.draft.to_submission() {
            Ok(input) => input,
            Err(e) => {
                self.success_message = None;
                self.error_message = Some(match &e {
                    AppError::Validation(msg) => msg.clone(),
                    other => other.to_string(),
                });
                return Err(e);
            }
        };

        match self.api.create_appointment(&input).await {
            Ok(()) => {
                info!("Appointment created: {} at {}", input.name, input.date);
                self.error_message = None;
                self.success_message = Some(messages::REGISTER_SUCCESS.to_string());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to create appointment: {}", e);
                self.success_message = None;
                self.error_message = Some(
                    e.api_message()
                        .unwrap_or(messages::REGISTER_FAILED)
                        .to_string(),
                );
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.error_message = None;
        self.success_message = None;
    }
}
