use tracing::{debug, info};

use crate::error::EditorError;
use crate::store::SchemaStore;

/// Transient state of the "add keyspace" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyspaceEditor {
    /// Validation message; empty when there is nothing to show.
    pub err: String,
}

/// Mediates between the sidebar controls and the schema store.
#[derive(Clone, Debug)]
pub struct SidebarController<S> {
    store: S,
    keyspace_editor: KeyspaceEditor,
}

impl<S: SchemaStore> SidebarController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            keyspace_editor: KeyspaceEditor::default(),
        }
    }

    /// Add a keyspace unless one with the same name already exists, in which
    /// case the editor error is set and the store is left untouched.
    pub fn add_keyspace(&mut self, name: &str, sharded: bool) {
        if self.store.contains_keyspace(name) {
            debug!("Rejected duplicate keyspace '{}'", name);
            self.keyspace_editor.err = EditorError::duplicate_keyspace(name).to_string();
            return;
        }
        self.store.add_keyspace(name, sharded);
        info!("Added keyspace '{}'", name);
        self.clear_keyspace_error();
    }

    /// Discard all edits
    pub fn reset(&mut self) {
        self.store.reset();
        info!("Schema reset");
        self.clear_keyspace_error();
    }

    pub fn clear_keyspace_error(&mut self) {
        self.keyspace_editor.err.clear();
    }

    pub fn keyspace_editor(&self) -> &KeyspaceEditor {
        &self.keyspace_editor
    }

    /// Whether the error banner should be shown
    pub fn has_error(&self) -> bool {
        !self.keyspace_editor.err.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
