pub mod auth_error;
pub mod ieso_auth;
