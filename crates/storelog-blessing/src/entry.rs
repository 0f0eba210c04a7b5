//! Blessing change entries.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use storelog_changelog::{Entry, FileChange};
use tracing::debug;

use crate::{BlessingError, BlessingResult, PundleChange};

/// Timestamp format used by Store repository logs, always read as UTC.
const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S%.3f";

/// One blessing: a named, timestamped change-set event.
///
/// An entry is accumulated by the log parser: duplicate log fragments for the
/// same blessing feed [`ChangeEntry::update_timestamp`], and each discovered
/// pundle change is appended with [`ChangeEntry::add_pundle`]. Once parsing
/// completes the entry is moved into its changelog set and only shared
/// references escape, so all mutation happens before publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    committer: String,
    timestamp: DateTime<Utc>,
    comment: String,
    pundles: Vec<PundleChange>,
    parent: Option<String>,
}

impl ChangeEntry {
    /// Creates a new entry from raw log fields.
    ///
    /// `timestamp_text` must match `MM/DD/YYYY HH:MM:SS.mmm` and is read as
    /// UTC regardless of host locale.
    ///
    /// # Errors
    ///
    /// Returns [`BlessingError::Timestamp`] if `timestamp_text` is malformed.
    pub fn new(
        committer: impl Into<String>,
        timestamp_text: &str,
        comment: impl Into<String>,
    ) -> BlessingResult<Self> {
        Ok(Self {
            committer: committer.into(),
            timestamp: parse_timestamp(timestamp_text)?,
            comment: comment.into(),
            pundles: Vec::new(),
            parent: None,
        })
    }

    /// Merges a timestamp reported by another log fragment for this blessing.
    ///
    /// Per-file timestamps within one blessing can differ slightly; the entry
    /// keeps the latest. An earlier-or-equal timestamp is ignored, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`BlessingError::Timestamp`] if `timestamp_text` is malformed.
    pub fn update_timestamp(&mut self, timestamp_text: &str) -> BlessingResult<()> {
        let parsed = parse_timestamp(timestamp_text)?;
        if parsed > self.timestamp {
            debug!(old = %self.timestamp, new = %parsed, "advancing blessing timestamp");
            self.timestamp = parsed;
        } else {
            debug!(current = %self.timestamp, ignored = %parsed, "ignoring stale timestamp");
        }
        Ok(())
    }

    /// Appends a pundle change.
    ///
    /// Insertion order is preserved and duplicates are kept as distinct
    /// records; classification of conflicting reports belongs to the caller.
    pub fn add_pundle(&mut self, pundle: PundleChange) {
        debug!(descriptor = %pundle.descriptor(), "recording pundle change");
        self.pundles.push(pundle);
    }

    /// Returns the committer identifier.
    #[must_use]
    pub fn committer(&self) -> &str {
        &self.committer
    }

    /// Returns the blessing timestamp as epoch milliseconds.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// Returns the blessing timestamp as a UTC instant.
    #[must_use]
    pub fn timestamp_utc(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the one-line summary: the comment up to the first line break,
    /// or the whole comment if it has none.
    #[must_use]
    pub fn message(&self) -> &str {
        self.comment.lines().next().unwrap_or("")
    }

    /// Returns the full, unmodified comment text.
    #[must_use]
    pub fn full_comment(&self) -> &str {
        &self.comment
    }

    /// Returns the accumulated pundle changes in insertion order.
    #[must_use]
    pub fn pundle_changes(&self) -> &[PundleChange] {
        &self.pundles
    }

    /// Returns one descriptor per pundle change, in insertion order.
    #[must_use]
    pub fn affected_paths(&self) -> Vec<String> {
        self.pundles.iter().map(PundleChange::descriptor).collect()
    }

    /// Derives one file record per pundle change, in insertion order.
    pub fn affected_files(&self) -> impl Iterator<Item = FileChange> + '_ {
        self.pundles
            .iter()
            .map(|pundle| FileChange::new(pundle.descriptor(), pundle.edit_type()))
    }

    /// Records the identifier of the containing changelog set.
    pub fn set_parent(&mut self, id: impl Into<String>) {
        self.parent = Some(id.into());
    }

    /// Returns the identifier of the containing changelog set, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

impl Entry for ChangeEntry {
    type File = FileChange;

    fn committer(&self) -> &str {
        ChangeEntry::committer(self)
    }

    fn timestamp_millis(&self) -> i64 {
        ChangeEntry::timestamp(self)
    }

    fn message(&self) -> &str {
        ChangeEntry::message(self)
    }

    fn full_comment(&self) -> &str {
        ChangeEntry::full_comment(self)
    }

    fn parent(&self) -> Option<&str> {
        ChangeEntry::parent(self)
    }

    fn set_parent(&mut self, id: &str) {
        ChangeEntry::set_parent(self, id);
    }

    fn affected_paths(&self) -> Vec<String> {
        ChangeEntry::affected_paths(self)
    }

    fn affected_files(&self) -> Vec<FileChange> {
        ChangeEntry::affected_files(self).collect()
    }
}

/// Parses a Store log timestamp as a UTC instant.
fn parse_timestamp(text: &str) -> BlessingResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| BlessingError::Timestamp {
            text: text.to_string(),
            source,
        })
}
