use crate::{traits::EntityKind, types::RecordId};

///
/// RecordMap
///
/// Deterministic id-keyed collection of entity rows.
/// Keys stay sorted ascending; lookups are binary searches. Insertion
/// order is deliberately irrelevant; iteration is always key order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordMap<E>(Vec<(RecordId, E)>);

impl<E> Default for RecordMap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> RecordMap<E> {
    /// Create an empty record map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Return the number of rows in the map.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return an iterator over `(id, row)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&RecordId, &E)> {
        self.0.iter().map(|(id, row)| (id, row))
    }

    /// Return an iterator over rows in key order.
    pub fn rows(&self) -> impl Iterator<Item = &E> {
        self.0.iter().map(|(_, row)| row)
    }

    /// Return an iterator over ids in key order.
    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.0.iter().map(|(id, _)| id)
    }

    /// Return a reference to the row for `id` if present.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&E> {
        self.find_index(id).ok().map(|idx| &self.0[idx].1)
    }

    /// Return a mutable reference to the row for `id` if present.
    #[must_use]
    pub fn get_mut(&mut self, id: &RecordId) -> Option<&mut E> {
        self.find_index(id).ok().map(|idx| &mut self.0[idx].1)
    }

    /// Insert or replace the row for `id`, returning the old row if present.
    pub fn insert(&mut self, id: RecordId, row: E) -> Option<E> {
        match self.find_index(&id) {
            Ok(index) => Some(std::mem::replace(&mut self.0[index].1, row)),
            Err(index) => {
                self.0.insert(index, (id, row));
                None
            }
        }
    }

    /// Returns `true` if the map contains `id`.
    #[must_use]
    pub fn contains_id(&self, id: &RecordId) -> bool {
        self.find_index(id).is_ok()
    }

    // Locate an id in the sorted backing vector.
    fn find_index(&self, id: &RecordId) -> Result<usize, usize> {
        self.0.binary_search_by(|(candidate, _)| candidate.cmp(id))
    }
}

impl<E: EntityKind> RecordMap<E> {
    /// Build a map from rows keyed by their own ids, keeping the last row
    /// for each id.
    #[must_use]
    pub fn from_rows(rows: Vec<E>) -> Self {
        let mut map = Self::new();
        for row in rows {
            map.insert(row.id().clone(), row);
        }

        map
    }
}

impl<E> IntoIterator for RecordMap<E> {
    type Item = (RecordId, E);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<E> FromIterator<(RecordId, E)> for RecordMap<E> {
    fn from_iter<I: IntoIterator<Item = (RecordId, E)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (id, row) in iter {
            map.insert(id, row);
        }

        map
    }
}

///
/// TESTS
///
