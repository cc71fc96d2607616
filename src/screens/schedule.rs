use std::sync::Arc;

use tracing::{info, warn};

use crate::api::AppointmentsApi;
use crate::dates;
use crate::error::AppError;
use crate::messages;
use crate::models::Appointment;

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Fetching,
    Loaded,
    Failed,
}

/// One rendered line of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
}

/// Listing with inline edit and delete.
pub struct ScheduleScreen {
    api: Arc<dyn AppointmentsApi>,
    appointments: Vec<Appointment>,
    error: Option<String>,
    load_state: LoadState,
    current: Option<Appointment>,
}

impl ScheduleScreen {
    pub fn new(api: Arc<dyn AppointmentsApi>) -> Self {
        Self {
            api,
            appointments: Vec::new(),
            error: None,
            load_state: LoadState::Idle,
            current: None,
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn current(&self) -> Option<&Appointment> {
        self.current.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.current.is_some()
    }

    /// First fetch when the screen is shown.
    pub async fn mount(&mut self) -> Result<(), AppError> {
        self.fetch().await
    }

    /// Re-fetches the list, dropping local changes that the server does not reflect.
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.fetch().await?;
        self.error = None;
        Ok(())
    }

    async fn fetch(&mut self) -> Result<(), AppError> {
        self.load_state = LoadState::Fetching;
        match self.api.list_appointments().await {
            Ok(appointments) => {
                self.appointments = appointments;
                self.load_state = LoadState::Loaded;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to fetch appointments: {}", e);
                self.error = Some(messages::LIST_NOT_FOUND.to_string());
                self.load_state = LoadState::Failed;
                Err(e)
            }
        }
    }

    /// Opens the edit draft for `id`, replacing any edit in progress.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        match self.appointments.iter().find(|a| a.id == id) {
            Some(appointment) => {
                self.current = Some(appointment.clone());
                true
            }
            None => false,
        }
    }

    pub fn set_current_name(&mut self, value: impl Into<String>) {
        if let Some(current) = self.current.as_mut() {
            current.name = value.into();
        }
    }

    /// Free text, expected as `dd/MM/yyyy HH:mm`. Sent as typed.
    pub fn set_current_date(&mut self, value: impl Into<String>) {
        if let Some(current) = self.current.as_mut() {
            current.date = value.into();
        }
    }

    pub fn set_current_location(&mut self, value: impl Into<String>) {
        if let Some(current) = self.current.as_mut() {
            current.location = value.into();
        }
    }

    /// Saves the edit draft. On failure the draft stays open for another try.
    pub async fn submit_edit(&mut self) -> Result<(), AppError> {
        let Some(current) = self.current.as_ref() else {
            return Ok(());
        };
        let id = current.id;
        let input = current.to_input();

        match self.api.update_appointment(id, &input).await {
            Ok(()) => {
                if let Some(appointment) = self.appointments.iter_mut().find(|a| a.id == id) {
                    appointment.apply(&input);
                }
                self.current = None;
                info!("Appointment {} updated", id);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to update appointment {}: {}", id, e);
                self.error = Some(match &e {
                    AppError::Rejected { .. } => messages::UPDATE_FAILED,
                    _ => messages::UPDATE_UNREACHABLE,
                }
                .to_string());
                Err(e)
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.current = None;
    }

    /// Removes `id` once confirmed. The local row goes away whatever the server answers.
    pub async fn delete(&mut self, id: i64, confirm: &dyn Confirm) -> bool {
        if !confirm.confirm(messages::DELETE_CONFIRM) {
            return false;
        }

        if let Err(e) = self.api.delete_appointment(id).await {
            warn!("Delete request for appointment {} failed: {}", id, e);
        }
        self.appointments.retain(|a| a.id != id);
        info!("Appointment {} removed from listing", id);
        true
    }

    pub fn rows(&self) -> Vec<AppointmentRow> {
        self.appointments
            .iter()
            .map(|a| AppointmentRow {
                id: a.id,
                name: a.name.clone(),
                date: dates::format_for_display(&a.date),
                location: a.location.clone(),
            })
            .collect()
    }
}
