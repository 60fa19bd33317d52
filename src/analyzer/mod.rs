pub mod api_surface;
pub mod classifier;

pub use api_surface::{ApiChangeDetector, KeywordApiDetector};
pub use classifier::CommitClassifier;
