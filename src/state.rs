use std::sync::Arc;

use crate::api::{AppointmentsApi, AppointmentsHttpClient};
use crate::config::ApiConfig;
use crate::error::AppError;
use crate::screens::{RegistrationScreen, ScheduleScreen};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn AppointmentsApi>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let api = AppointmentsHttpClient::new(config)?;
        Ok(Self { api: Arc::new(api) })
    }

    pub fn registration(&self) -> RegistrationScreen {
        RegistrationScreen::new(self.api.clone())
    }

    pub fn schedule(&self) -> ScheduleScreen {
        ScheduleScreen::new(self.api.clone())
    }
}
