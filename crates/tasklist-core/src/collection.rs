//! Ordered collection of lists keyed by id.

use crate::ListId;

/// Anything that can be located in a [`ListsCollection`] by its list id.
pub trait Keyed {
    fn list_id(&self) -> &ListId;
}

/// Lists in the order they were added, minus the ones removed since.
///
/// Ids are not required to be unique. Lookups and removals by id act on the
/// first entry carrying it.
#[derive(Debug, Clone)]
pub struct ListsCollection<L> {
    entries: Vec<L>,
}

impl<L: Keyed> ListsCollection<L> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry at the end.
    pub fn push(&mut self, entry: L) {
        self.entries.push(entry);
    }

    /// Remove the first entry with the given id. Absent ids are ignored.
    pub fn remove(&mut self, id: &ListId) -> Option<L> {
        self.remove_where(|entry| entry.list_id() == id)
    }

    /// Remove the first entry matching `pred`, keeping the others in order.
    pub fn remove_where(&mut self, pred: impl Fn(&L) -> bool) -> Option<L> {
        let index = self.entries.iter().position(pred)?;
        Some(self.entries.remove(index))
    }

    /// First entry with the given id.
    pub fn get(&self, id: &ListId) -> Option<&L> {
        self.entries.iter().find(|entry| entry.list_id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &L> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Keyed> Default for ListsCollection<L> {
    fn default() -> Self {
        Self::new()
    }
}
