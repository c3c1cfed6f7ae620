pub mod fetch_error;
