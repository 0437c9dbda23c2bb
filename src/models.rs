//! Frontend Models
//!
//! Data structures for the todo list and its view state.

use serde::{Deserialize, Serialize};

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, assigned at creation and never reassigned
    pub id: u64,
    /// Item text content
    pub title: String,
    /// Completion status
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, not-yet-completed item
    pub fn new(id: u64, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }
}

/// Which subset of the list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every item
    #[default]
    All,
    /// Only completed items
    Completed,
    /// Only items still open
    Uncompleted,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Uncompleted => "uncompleted",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "completed" => FilterMode::Completed,
            "uncompleted" => FilterMode::Uncompleted,
            _ => FilterMode::All,
        }
    }

    /// Label shown in the filter selector
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Uncompleted => "Uncompleted",
        }
    }
}

/// Whether the entry form appends a new item or rewrites an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryMode {
    /// Submit appends a new item
    #[default]
    Adding,
    /// Submit replaces the title of the item with this id
    Editing(u64),
}

impl EntryMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, EntryMode::Editing(_))
    }
}

/// Flavor of a transient notice, mapped onto the alert CSS classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Danger,
}

impl NoticeKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "alert-success",
            NoticeKind::Danger => "alert-danger",
        }
    }
}

/// Transient user-facing feedback shown above the entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Danger,
            message: message.into(),
        }
    }
}
