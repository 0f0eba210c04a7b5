//! Blessing change-set records for Storelog.
//!
//! A blessing is one named, timestamped change-set event in a Store package
//! repository. This crate provides the record types the changelog parser
//! accumulates into:
//! - [`ChangeEntry`]: One blessing (committer, comment, canonical timestamp)
//! - [`PundleChange`]: One modified package or bundle within a blessing
//! - [`ChangeKind`], [`PundleType`]: Closed enumerations for change metadata
//!
//! Entries implement the [`storelog_changelog::Entry`] capability, so they
//! plug into [`storelog_changelog::ChangeLogSet`] unchanged.

mod entry;
mod error;
mod pundle;

pub use entry::ChangeEntry;
pub use error::{BlessingError, BlessingResult};
pub use pundle::{ChangeKind, PundleChange, PundleType};
