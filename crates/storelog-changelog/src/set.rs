//! Changelog-set container.

use crate::Entry;

/// An ordered collection of change-set entries for one build.
///
/// The set owns its entries. Pushing an entry stamps the set's identifier
/// into it as a non-owning back-reference, so the object graph closes
/// without reference cycles.
#[derive(Debug, Clone)]
pub struct ChangeLogSet<E: Entry> {
    id: String,
    entries: Vec<E>,
}

impl<E: Entry> ChangeLogSet<E> {
    /// Creates an empty set identified by `id` (typically a build key).
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    /// Returns the set identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Takes ownership of `entry` and appends it, stamping the back-reference.
    pub fn push(&mut self, mut entry: E) {
        entry.set_parent(&self.id);
        self.entries.push(entry);
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, E: Entry> IntoIterator for &'a ChangeLogSet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
