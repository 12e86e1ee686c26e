// Expose modules for testing
pub mod config;
pub mod i18n;
pub mod payment;
pub mod ui;
