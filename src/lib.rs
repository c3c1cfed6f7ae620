/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::local::*;
pub use internal::entrance::remote::*;

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::auth_error::AuthError;
    pub use internal::auth::structs::ieso_auth::IesoAuth;
}

pub mod config {
    use crate::internal;
    pub use internal::config::structs::config_error::ConfigError;
    pub use internal::config::structs::mirror_config::*;
}

/// 对外提供列表接口的基础访问能力，不限制死在爬虫里，以防有人自己要用
pub mod listing {
    pub mod functions {
        use crate::internal;
        pub use internal::listing::functions::get_listing_raw_data::*;
    }

    pub mod enums {
        use crate::internal;
        pub use internal::listing::enums::*;
    }

    pub mod traits {
        use crate::internal;
        pub use internal::listing::raw_json::impl_raw_listing::*;
        pub use internal::listing::traits::directory_provider::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::listing::raw_json::raw_listing::*;
        pub use internal::listing::structs::listing_error::ListingError;
    }
}

pub mod remote_entry {
    use crate::internal;
    pub use internal::remote_entry::modified_time::*;
    pub use internal::remote_entry::structs::processed_entry::*;
    pub use internal::remote_entry::structs::remote_entry::*;
}

pub mod selector {
    use crate::internal;
    pub use internal::selector::directory_selector::*;
    pub use internal::selector::file_selector::*;
    pub use internal::selector::paths::*;
    pub use internal::selector::structs::*;
    pub use internal::selector::version_filter::*;
}

pub mod fetcher {
    use crate::internal;
    pub use internal::fetcher::structs::fetch_error::FetchError;
    pub use internal::fetcher::traits::blob_fetcher::*;
}

pub mod client {
    use crate::internal;
    pub use internal::client::ieso_client::IesoClient;
}

pub mod crawler {
    use crate::internal;
    pub use internal::crawler::structs::*;
}

pub mod logging {
    use crate::internal;
    pub use internal::logging::date_format::*;
    pub use internal::logging::file_logger::*;
    pub use internal::logging::line_format::LineFormat;
    pub use internal::logging::line_template::*;
}
