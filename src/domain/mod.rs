//! Core value objects: bump kinds, parsed versions, and commit records.

pub mod bump;
pub mod commit;
pub mod version;

pub use bump::BumpKind;
pub use commit::CommitRecord;
pub use version::{ParsedVersion, DEFAULT_PRERELEASE_LABEL};
