pub mod crawl_error;
pub mod crawler;
pub mod mirror_report;
pub mod request_mode;

pub use crawl_error::CrawlError;
pub use crawler::Crawler;
pub use mirror_report::{MirrorReport, SkippedDirectory};
pub use request_mode::RequestMode;
