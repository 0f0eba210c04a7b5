//! Pundle change records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use storelog_changelog::EditType;

use crate::{BlessingError, BlessingResult};

/// The kind of change applied to a pundle within a blessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// The pundle was introduced.
    Added,
    /// The pundle was modified.
    Edited,
    /// The pundle was removed.
    Deleted,
}

impl ChangeKind {
    /// Returns the lowercase string form used in Store logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Edited => "edited",
            ChangeKind::Deleted => "deleted",
        }
    }
}

impl FromStr for ChangeKind {
    type Err = BlessingError;

    fn from_str(s: &str) -> BlessingResult<Self> {
        match s {
            "added" => Ok(ChangeKind::Added),
            "edited" => Ok(ChangeKind::Edited),
            "deleted" => Ok(ChangeKind::Deleted),
            other => Err(BlessingError::UnknownChangeKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of a pundle: a package or a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PundleType {
    /// A Store package.
    Package,
    /// A Store bundle.
    Bundle,
}

impl PundleType {
    /// Returns the capitalized human-readable label used in descriptors.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PundleType::Package => "Package",
            PundleType::Bundle => "Bundle",
        }
    }
}

impl FromStr for PundleType {
    type Err = BlessingError;

    fn from_str(s: &str) -> BlessingResult<Self> {
        match s {
            "package" => Ok(PundleType::Package),
            "bundle" => Ok(PundleType::Bundle),
            other => Err(BlessingError::UnknownPundleType(other.to_string())),
        }
    }
}

impl std::fmt::Display for PundleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One modified pundle within a blessing.
///
/// Immutable once constructed; owned by exactly one [`ChangeEntry`] after
/// being appended. Deleted pundles carry no version, by Store convention.
///
/// [`ChangeEntry`]: crate::ChangeEntry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PundleChange {
    /// The kind of change.
    pub kind: ChangeKind,

    /// Whether this pundle is a package or a bundle.
    pub pundle_type: PundleType,

    /// The pundle name.
    pub name: String,

    /// The pundle version, absent for deletions.
    pub version: Option<String>,
}

impl PundleChange {
    /// Creates a versionless pundle change (the form used for deletions).
    #[must_use]
    pub fn new(kind: ChangeKind, pundle_type: PundleType, name: impl Into<String>) -> Self {
        Self {
            kind,
            pundle_type,
            name: name.into(),
            version: None,
        }
    }

    /// Sets the version (the form used for additions and edits).
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Derives the canonical descriptor string for this change.
    ///
    /// Format: `"<Label> <name>"`, with `", version <version>"` appended when
    /// a version is present. Downstream path comparisons are string-exact, so
    /// the token order and punctuation are load-bearing.
    #[must_use]
    pub fn descriptor(&self) -> String {
        match &self.version {
            Some(version) => {
                format!("{} {}, version {version}", self.pundle_type.label(), self.name)
            }
            None => format!("{} {}", self.pundle_type.label(), self.name),
        }
    }

    /// Collapses the three-way change kind into the framework's two-state
    /// edit model.
    ///
    /// Deletions map to [`EditType::Edit`]; the framework has no delete
    /// state, and this mapping is fixed.
    #[must_use]
    pub fn edit_type(&self) -> EditType {
        match self.kind {
            ChangeKind::Added => EditType::Add,
            ChangeKind::Edited | ChangeKind::Deleted => EditType::Edit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_kind_from_str() {
        assert_eq!("added".parse::<ChangeKind>().unwrap(), ChangeKind::Added);
        assert_eq!("edited".parse::<ChangeKind>().unwrap(), ChangeKind::Edited);
        assert_eq!("deleted".parse::<ChangeKind>().unwrap(), ChangeKind::Deleted);
    }

    #[test]
    fn test_change_kind_rejects_unknown() {
        let err = "renamed".parse::<ChangeKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown change kind: renamed");
    }

    #[test]
    fn test_pundle_type_from_str() {
        assert_eq!("package".parse::<PundleType>().unwrap(), PundleType::Package);
        assert_eq!("bundle".parse::<PundleType>().unwrap(), PundleType::Bundle);
        assert!("parcel".parse::<PundleType>().is_err());
    }

    #[test]
    fn test_pundle_type_label() {
        assert_eq!(PundleType::Package.label(), "Package");
        assert_eq!(PundleType::Bundle.label(), "Bundle");
    }

    #[test]
    fn test_descriptor_with_version() {
        let pundle = PundleChange::new(ChangeKind::Added, PundleType::Package, "AddedPundle")
            .with_version("1");
        assert_eq!(pundle.descriptor(), "Package AddedPundle, version 1");
    }

    #[test]
    fn test_descriptor_without_version() {
        let pundle = PundleChange::new(ChangeKind::Deleted, PundleType::Package, "DeletedPundle");
        assert_eq!(pundle.descriptor(), "Package DeletedPundle");
    }

    #[test]
    fn test_descriptor_bundle_label() {
        let pundle = PundleChange::new(ChangeKind::Edited, PundleType::Bundle, "EditedPundle")
            .with_version("42");
        assert_eq!(pundle.descriptor(), "Bundle EditedPundle, version 42");
    }

    #[test]
    fn test_descriptor_is_deterministic() {
        let pundle = PundleChange::new(ChangeKind::Added, PundleType::Package, "AddedPundle")
            .with_version("1");
        assert_eq!(pundle.descriptor(), pundle.descriptor());
    }

    #[test]
    fn test_edit_type_classification() {
        let added = PundleChange::new(ChangeKind::Added, PundleType::Package, "A");
        let edited = PundleChange::new(ChangeKind::Edited, PundleType::Bundle, "B");
        let deleted = PundleChange::new(ChangeKind::Deleted, PundleType::Package, "C");

        assert_eq!(added.edit_type(), EditType::Add);
        assert_eq!(edited.edit_type(), EditType::Edit);
        assert_eq!(deleted.edit_type(), EditType::Edit);
    }

    #[test]
    fn test_serialize_deserialize() {
        let pundle = PundleChange::new(ChangeKind::Edited, PundleType::Bundle, "EditedPundle")
            .with_version("42");
        let json = serde_json::to_string(&pundle).unwrap();
        let back: PundleChange = serde_json::from_str(&json).unwrap();
        assert_eq!(pundle, back);
    }
}
