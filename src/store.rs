//! Todo List State Store
//!
//! The single authoritative holder of the list, the filter selection and
//! the entry mode. Every operation runs synchronously; every change to
//! the list is saved to the injected store before the operation returns.

use std::sync::Arc;

use crate::ids::IdSource;
use crate::models::{EntryMode, FilterMode, Notice, TodoItem};
use crate::storage::{self, KeyValueStore, LIST_KEY};

/// Errors an operation can hand back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Submitted text was empty after trimming
    EmptyInput,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::EmptyInput => write!(f, "you didn't enter anything"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Authoritative todo list state
pub struct TodoStore {
    items: Vec<TodoItem>,
    filter: FilterMode,
    entry: EntryMode,
    persist: Arc<dyn KeyValueStore>,
    ids: Arc<dyn IdSource>,
}

impl TodoStore {
    /// Build the store from whatever the persisted key holds
    ///
    /// A missing key or an unreadable payload yields an empty list;
    /// startup never fails on bad saved data.
    pub fn load(persist: Arc<dyn KeyValueStore>, ids: Arc<dyn IdSource>) -> Self {
        let items = match persist.read(LIST_KEY) {
            Some(raw) => match storage::decode_list(&raw) {
                Ok(items) => items,
                Err(err) => {
                    log::warn!("discarding unreadable saved list: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self {
            items,
            filter: FilterMode::default(),
            entry: EntryMode::default(),
            persist,
            ids,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn entry(&self) -> EntryMode {
        self.entry
    }

    /// Commit the entry field
    ///
    /// In `Editing` mode the targeted item gets the new title and its
    /// completion flag reset; in `Adding` mode a new item is appended.
    /// Either way the entry mode ends up back at `Adding`.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyInput`] when the trimmed text is empty; the
    /// list and the entry mode are left untouched.
    pub fn submit(&mut self, text: &str) -> Result<Notice, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyInput);
        }

        let notice = match self.entry {
            EntryMode::Editing(id) => {
                // A vanished id (list cleared mid-edit) still resolves the
                // edit: nothing changes, the mode resets.
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.title = text.to_string();
                    item.completed = false;
                }
                self.entry = EntryMode::Adding;
                Notice::success("value changed")
            }
            EntryMode::Adding => {
                let id = self.ids.next_id();
                self.items.push(TodoItem::new(id, text.to_string()));
                Notice::success("item added to the list")
            }
        };

        self.save();
        Ok(notice)
    }

    /// Flip the completion flag of the item with `id`; unknown ids are a
    /// silent no-op
    pub fn toggle_completed(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.completed = !item.completed;
            self.save();
        }
    }

    /// Delete the item with `id`
    ///
    /// Returns the notice to show, or `None` when the id was not present
    /// and nothing changed.
    pub fn remove(&mut self, id: u64) -> Option<Notice> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return None;
        }
        self.save();
        Some(Notice::danger("item removed"))
    }

    /// Drop every item
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.save();
    }

    /// Start editing the item with `id`, returning its current title for
    /// the entry field
    ///
    /// The view only offers editing on rendered items, so `None` (id not
    /// present, mode unchanged) does not occur in practice.
    pub fn begin_edit(&mut self, id: u64) -> Option<String> {
        let title = self
            .items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.title.clone())?;
        self.entry = EntryMode::Editing(id);
        Some(title)
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    /// The subset of the list the current filter shows, in list order
    pub fn visible_items(&self) -> Vec<TodoItem> {
        match self.filter {
            FilterMode::All => self.items.clone(),
            FilterMode::Completed => self
                .items
                .iter()
                .filter(|item| item.completed)
                .cloned()
                .collect(),
            FilterMode::Uncompleted => self
                .items
                .iter()
                .filter(|item| !item.completed)
                .cloned()
                .collect(),
        }
    }

    fn save(&self) {
        match storage::encode_list(&self.items) {
            Ok(payload) => self.persist.write(LIST_KEY, &payload),
            Err(err) => log::error!("failed to encode todo list: {err}"),
        }
    }
}
