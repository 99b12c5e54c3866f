//! Backing record collection with stable row identity.

use std::fmt;

use uuid::Uuid;

/// Identity of a row in a [`RecordCollection`].
///
/// Assigned on insertion and never reused, so removing a row by id can
/// never hit a different record with equal contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(Uuid);

impl RowId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record together with its identity.
#[derive(Debug, Clone)]
pub struct Row<R> {
    pub id: RowId,
    pub record: R,
}

/// An ordered collection of records.
#[derive(Debug, Clone)]
pub struct RecordCollection<R> {
    rows: Vec<Row<R>>,
}

impl<R> RecordCollection<R> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_records(records: impl IntoIterator<Item = R>) -> Self {
        let mut collection = Self::new();
        for record in records {
            collection.push(record);
        }
        collection
    }

    /// Append a record and return its id.
    pub fn push(&mut self, record: R) -> RowId {
        let id = RowId::new();
        self.rows.push(Row { id, record });
        id
    }

    pub fn get(&self, id: RowId) -> Option<&R> {
        self.rows.iter().find(|row| row.id == id).map(|row| &row.record)
    }

    /// Id of the first record matching the predicate.
    pub fn find(&self, mut predicate: impl FnMut(&R) -> bool) -> Option<RowId> {
        self.rows
            .iter()
            .find(|row| predicate(&row.record))
            .map(|row| row.id)
    }

    /// Remove the record with this id. Other rows keep their relative order.
    ///
    /// Returns `None` and leaves the collection untouched if the id is not
    /// present.
    pub fn remove(&mut self, id: RowId) -> Option<R> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(index).record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row<R>> {
        self.rows.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.rows.iter().map(|row| &row.record)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R> Default for RecordCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FromIterator<R> for RecordCollection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_by_identity_not_value() {
        let mut names: RecordCollection<&str> = ["a", "b", "a"].into_iter().collect();
        let ids: Vec<RowId> = names.iter().map(|row| row.id).collect();

        assert_eq!(names.remove(ids[2]), Some("a"));
        assert_eq!(names.records().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(names.iter().next().unwrap().id, ids[0]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut names: RecordCollection<&str> = ["a", "b"].into_iter().collect();
        let id = names.find(|n| *n == "a").unwrap();
        assert_eq!(names.remove(id), Some("a"));
        assert_eq!(names.remove(id), None);
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let names: RecordCollection<u8> = (0..50).collect();
        let mut ids: Vec<RowId> = names.iter().map(|row| row.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }
}
