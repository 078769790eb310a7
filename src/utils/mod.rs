// Shared utilities: errors, configuration, validation and logging

pub mod config;
pub mod error;
pub mod logging;
pub mod validation;
