use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::error::{EditorError, Result};
use crate::schema::{self, Keyspace, VSchema};

/// The collaborator that owns the keyspace mapping being edited.
pub trait SchemaStore {
    /// All keyspaces, ordered by name
    fn keyspaces(&self) -> &BTreeMap<String, Keyspace>;

    /// Add a keyspace. Callers check uniqueness first.
    fn add_keyspace(&mut self, name: &str, sharded: bool);

    /// Restore the store to its initial state
    fn reset(&mut self);

    fn contains_keyspace(&self, name: &str) -> bool {
        self.keyspaces().contains_key(name)
    }
}

/// In-memory schema store: a snapshot of the original VSchema plus the
/// working copy that edits are applied to.
#[derive(Clone, Debug, Default)]
pub struct CurrentSchema {
    original: VSchema,
    current: VSchema,
}

impl CurrentSchema {
    /// Create a store whose working copy starts as a clone of `original`
    pub fn new(original: VSchema) -> Self {
        Self {
            current: original.clone(),
            original,
        }
    }

    /// Replace the snapshot, and the working copy too unless it has been
    /// edited. Edits are never discarded: on a conflict the new snapshot only
    /// becomes the target of the next `reset`.
    pub fn load(&mut self, vschema: VSchema) -> Result<()> {
        if self.is_modified() {
            warn!(
                "Schema loaded over {} edited keyspaces; keeping edits",
                self.current.keyspaces.len()
            );
            self.original = vschema;
            return Err(EditorError::SeedConflict);
        }
        info!("Loaded schema with {} keyspaces", vschema.keyspaces.len());
        self.current = vschema.clone();
        self.original = vschema;
        Ok(())
    }

    /// The working copy
    pub fn current(&self) -> &VSchema {
        &self.current
    }

    pub fn original(&self) -> &VSchema {
        &self.original
    }

    /// Whether the working copy has diverged from the snapshot
    pub fn is_modified(&self) -> bool {
        self.current != self.original
    }
}

impl SchemaStore for CurrentSchema {
    fn keyspaces(&self) -> &BTreeMap<String, Keyspace> {
        &self.current.keyspaces
    }

    fn add_keyspace(&mut self, name: &str, sharded: bool) {
        schema::add_keyspace(&mut self.current.keyspaces, name, sharded);
    }

    fn reset(&mut self) {
        debug!(
            "Resetting schema to {} original keyspaces",
            self.original.keyspaces.len()
        );
        self.current = self.original.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> CurrentSchema {
        let mut original = VSchema::default();
        schema::add_keyspace(&mut original.keyspaces, "user", true);
        CurrentSchema::new(original)
    }

    #[test]
    fn test_add_then_reset_restores_original() {
        let mut store = seeded();
        assert!(!store.is_modified());

        store.add_keyspace("lookup", false);
        assert!(store.contains_keyspace("lookup"));
        assert!(store.is_modified());
        assert!(!store.original().keyspaces.contains_key("lookup"));

        store.reset();
        assert!(!store.contains_keyspace("lookup"));
        assert!(store.contains_keyspace("user"));
        assert!(!store.is_modified());
    }

    #[test]
    fn test_reset_of_empty_store() {
        let mut store = CurrentSchema::default();
        store.add_keyspace("main", false);
        store.reset();
        assert!(store.keyspaces().is_empty());
    }

    #[test]
    fn test_load_replaces_unedited_schema() {
        let mut store = seeded();

        let mut loaded = VSchema::default();
        schema::add_keyspace(&mut loaded.keyspaces, "main", false);
        store.load(loaded.clone()).unwrap();

        assert_eq!(store.current(), &loaded);
        assert!(!store.is_modified());
        store.reset();
        assert_eq!(store.current(), &loaded);
        assert!(!store.contains_keyspace("user"));
    }

    #[test]
    fn test_load_over_edits_keeps_them() {
        let mut store = CurrentSchema::default();
        store.add_keyspace("ks9", false);

        let mut loaded = VSchema::default();
        schema::add_keyspace(&mut loaded.keyspaces, "main", true);
        let err = store.load(loaded.clone()).unwrap_err();

        assert!(matches!(err, EditorError::SeedConflict));
        assert!(store.contains_keyspace("ks9"));
        assert!(!store.contains_keyspace("main"));
        assert!(store.is_modified());
        assert_eq!(store.original(), &loaded);

        store.reset();
        assert_eq!(store.current(), &loaded);
    }
}
