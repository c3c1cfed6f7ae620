pub mod modified_time;
pub mod structs;
