pub mod listing_error;
