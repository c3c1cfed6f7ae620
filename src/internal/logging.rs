pub mod date_format;
pub mod file_logger;
pub mod line_format;
pub mod line_template;
