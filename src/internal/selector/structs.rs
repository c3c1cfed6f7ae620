pub mod folder_bucket;
pub mod select_error;
pub mod selection;
pub mod staleness_policy;
pub mod traversal_state;

pub use folder_bucket::FolderBucket;
pub use select_error::SelectError;
pub use selection::Selection;
pub use staleness_policy::StalenessPolicy;
pub use traversal_state::TraversalState;
