mod config;

pub use config::{AppState, BusinessHours};
