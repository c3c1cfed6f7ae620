pub mod processed_entry;
pub mod remote_entry;
