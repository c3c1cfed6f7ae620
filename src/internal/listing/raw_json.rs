pub mod impl_raw_listing;
pub mod raw_listing;
