pub mod appointment;
pub mod draft;

pub use appointment::{Appointment, AppointmentInput};
pub use draft::Draft;
