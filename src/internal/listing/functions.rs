pub mod get_listing_raw_data;
