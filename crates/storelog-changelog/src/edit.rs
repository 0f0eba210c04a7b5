//! Edit-type classification.

use serde::{Deserialize, Serialize};

/// The two-state edit classification recognized by the changelog framework.
///
/// Three-way change models (added/edited/deleted) must collapse into this
/// enum; deletions map to [`EditType::Edit`]. The mapping is a fixed contract
/// decided by the record type, not per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditType {
    /// The unit was introduced by this change.
    Add,
    /// The unit existed before and was modified or removed.
    Edit,
}

impl EditType {
    /// Returns the lowercase string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EditType::Add => "add",
            EditType::Edit => "edit",
        }
    }
}

impl std::fmt::Display for EditType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
