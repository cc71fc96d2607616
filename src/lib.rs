pub mod api;
pub mod config;
pub mod console;
pub mod dates;
pub mod error;
pub mod messages;
pub mod models;
pub mod screens;
pub mod state;
