use std::env;

use reqwest::Url;

use crate::error::AppError;

pub const API_URL_VAR: &str = "API_URL";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed)
            .map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", API_URL_VAR, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "{} must use http or https, got {}",
                API_URL_VAR,
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var(API_URL_VAR)
            .map_err(|_| AppError::Config(format!("{} is not set", API_URL_VAR)))?;
        Self::new(base_url)
    }

    pub fn appointments_url(&self) -> String {
        format!("{}/appointments", self.base_url)
    }

    pub fn appointment_url(&self, id: i64) -> String {
        format!("{}/appointments/{}", self.base_url, id)
    }
}
