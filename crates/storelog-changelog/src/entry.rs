//! Entry and affected-file capabilities.

use serde::{Deserialize, Serialize};

use crate::EditType;

/// Capability exposed by every file record derived from a change-set entry.
pub trait AffectedFile {
    /// Returns the affected path.
    fn path(&self) -> &str;

    /// Returns the edit classification for this file.
    fn edit_type(&self) -> EditType;
}

/// An owned affected-file record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// The affected path.
    pub path: String,

    /// The edit classification.
    pub edit_type: EditType,
}

impl FileChange {
    /// Creates a new file record.
    #[must_use]
    pub fn new(path: impl Into<String>, edit_type: EditType) -> Self {
        Self {
            path: path.into(),
            edit_type,
        }
    }
}

impl AffectedFile for FileChange {
    fn path(&self) -> &str {
        &self.path
    }

    fn edit_type(&self) -> EditType {
        self.edit_type
    }
}

/// Capability exposed by one change-set entry to the changelog framework.
///
/// An entry is built by a parser (mutably), then moved into a
/// [`ChangeLogSet`](crate::ChangeLogSet); consumers only ever observe it
/// through shared references after that point.
pub trait Entry {
    /// The file record type derived from this entry.
    type File: AffectedFile;

    /// Returns the committer identifier.
    fn committer(&self) -> &str;

    /// Returns the entry timestamp as epoch milliseconds (UTC).
    fn timestamp_millis(&self) -> i64;

    /// Returns the one-line summary message.
    fn message(&self) -> &str;

    /// Returns the full, unmodified comment text.
    fn full_comment(&self) -> &str;

    /// Returns the identifier of the containing changelog set, if any.
    fn parent(&self) -> Option<&str>;

    /// Records the identifier of the containing changelog set.
    ///
    /// This is a non-owning back-reference; the set owns the entry, never
    /// the reverse.
    fn set_parent(&mut self, id: &str);

    /// Returns the affected paths, in insertion order.
    fn affected_paths(&self) -> Vec<String>;

    /// Returns the derived file records, in insertion order.
    fn affected_files(&self) -> Vec<Self::File>;
}
