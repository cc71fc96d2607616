pub mod registration;
pub mod schedule;

pub use registration::RegistrationScreen;
pub use schedule::{AppointmentRow, Confirm, LoadState, ScheduleScreen};
