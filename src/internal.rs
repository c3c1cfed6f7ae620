pub mod auth;
pub mod client;
pub mod config;
pub mod crawler;
pub mod entrance;
pub mod fetcher;
pub mod listing;
pub mod logging;
pub mod remote_entry;
pub mod selector;
