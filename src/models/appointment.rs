use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub date: String,
    #[serde(rename = "local")]
    pub location: String,
}

/// Body of create and update requests. The server assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentInput {
    pub name: String,
    pub date: String,
    #[serde(rename = "local")]
    pub location: String,
}

impl Appointment {
    pub fn to_input(&self) -> AppointmentInput {
        AppointmentInput {
            name: self.name.clone(),
            date: self.date.clone(),
            location: self.location.clone(),
        }
    }

    /// Overwrites every editable field with the submitted values.
    pub fn apply(&mut self, input: &AppointmentInput) {
        self.name = input.name.clone();
        self.date = input.date.clone();
        self.location = input.location.clone();
    }
}
