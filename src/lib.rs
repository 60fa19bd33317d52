pub mod analyzer;
pub mod cancel;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod resolver;

pub use cancel::CancelToken;
pub use domain::{BumpKind, CommitRecord, ParsedVersion};
pub use error::{NextverError, Result};
pub use resolver::{ResolveOptions, VersionResolution, VersionResolver};
