//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, DEFAULT_CLIPBOARD_TOOL, DEFAULT_LOG_FILTER};
