//! Ordered entity collections (assets, beneficiaries, witnesses, executors).

use shared::domain::{EntityId, EntityKind};
use tracing::debug;

use crate::fields::FieldStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    id: EntityId,
    fields: FieldStore,
}

impl EntityRecord {
    fn blank(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            fields: FieldStore::new(kind.fields()),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// Empty string for fields outside the schema.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).unwrap_or_default()
    }
}

/// Records of one kind in insertion order.
///
/// Ids are `max(existing) + 1` at add time, so ids freed by a removal can be
/// handed out again. Once non-empty, a collection never drops below one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    kind: EntityKind,
    records: Vec<EntityRecord>,
}

impl Collection {
    /// A collection seeded with one blank record, as every form starts.
    pub fn new(kind: EntityKind) -> Self {
        let mut collection = Self::empty(kind);
        collection.add();
        collection
    }

    pub fn empty(kind: EntityKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn next_id(&self) -> EntityId {
        self.records
            .iter()
            .map(|record| record.id.0)
            .max()
            .map_or(EntityId(1), |max| EntityId(max + 1))
    }

    pub fn add(&mut self) -> EntityId {
        let id = self.next_id();
        self.records.push(EntityRecord::blank(id, self.kind));
        debug!(kind = self.kind.label(), id = id.0, "added record");
        id
    }

    /// Removes the record unless it is the last one left. Unknown ids are ignored.
    pub fn remove(&mut self, id: EntityId) -> bool {
        if self.records.len() <= 1 {
            return false;
        }
        let Some(idx) = self.records.iter().position(|record| record.id == id) else {
            return false;
        };
        self.records.remove(idx);
        debug!(kind = self.kind.label(), id = id.0, "removed record");
        true
    }

    pub fn update(&mut self, id: EntityId, field: &str, value: impl Into<String>) -> bool {
        self.records
            .iter_mut()
            .find(|record| record.id == id)
            .is_some_and(|record| record.fields.set(field, value))
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn list(&self) -> &[EntityRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> {
        self.records.iter()
    }

    pub fn first(&self) -> Option<&EntityRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
