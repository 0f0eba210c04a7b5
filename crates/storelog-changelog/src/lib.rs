//! Generic changelog abstraction for Storelog.
//!
//! This crate provides the seam between concrete change-set records and the
//! CI changelog machinery that consumes them:
//! - [`EditType`]: The two-state edit classification the framework recognizes
//! - [`AffectedFile`]: Capability exposed by every derived file record
//! - [`FileChange`]: A concrete owned file record
//! - [`Entry`]: Capability exposed by a change-set entry
//! - [`ChangeLogSet`]: An ordered container of entries for one build

mod edit;
mod entry;
mod set;

pub use edit::EditType;
pub use entry::{AffectedFile, Entry, FileChange};
pub use set::ChangeLogSet;
