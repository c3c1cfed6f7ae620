pub mod config_error;
pub mod mirror_config;
