//! Application Context
//!
//! Shared state provided via Leptos Context API. Components express user
//! intents through the methods here; each method runs one store
//! operation and routes its notice, if any, to the alert area.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ids::IdSource;
use crate::models::{FilterMode, Notice};
use crate::storage::KeyValueStore;
use crate::store::TodoStore;

/// How long a notice stays up before it clears itself
const NOTICE_TIMEOUT_MS: u32 = 3_000;

/// App-wide state handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Authoritative list state
    pub store: RwSignal<TodoStore>,
    /// Text currently in the entry field
    pub draft: RwSignal<String>,
    /// Notice currently shown above the form
    pub notice: RwSignal<Option<Notice>>,
    /// Bumped per notice so a stale timer never clears a newer one
    notice_seq: RwSignal<u32>,
}

impl AppContext {
    pub fn new(persist: Arc<dyn KeyValueStore>, ids: Arc<dyn IdSource>) -> Self {
        let store = TodoStore::load(persist, ids);
        log::info!("loaded {} saved item(s)", store.items().len());

        Self {
            store: RwSignal::new(store),
            draft: RwSignal::new(String::new()),
            notice: RwSignal::new(None),
            notice_seq: RwSignal::new(0),
        }
    }

    /// Commit the entry field: add a new item or finish an edit
    pub fn submit_draft(&self) {
        let text = self.draft.get_untracked();
        let mut outcome = None;
        self.store.update(|store| outcome = Some(store.submit(&text)));

        match outcome {
            Some(Ok(notice)) => {
                self.draft.set(String::new());
                self.show_notice(notice);
            }
            Some(Err(err)) => self.show_notice(Notice::danger(err.to_string())),
            None => {}
        }
    }

    pub fn toggle_completed(&self, id: u64) {
        self.store.update(|store| store.toggle_completed(id));
    }

    pub fn remove_item(&self, id: u64) {
        let mut notice = None;
        self.store.update(|store| notice = store.remove(id));
        if let Some(notice) = notice {
            self.show_notice(notice);
        }
    }

    pub fn clear_all(&self) {
        self.store.update(TodoStore::clear_all);
    }

    /// Switch the entry form to edit mode, loading the item's title
    pub fn begin_edit(&self, id: u64) {
        let mut title = None;
        self.store.update(|store| title = store.begin_edit(id));
        if let Some(title) = title {
            self.draft.set(title);
        }
    }

    pub fn set_filter(&self, mode: FilterMode) {
        self.store.update(|store| store.set_filter(mode));
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    fn show_notice(&self, notice: Notice) {
        let seq = self.notice_seq.get_untracked().wrapping_add(1);
        self.notice_seq.set(seq);
        self.notice.set(Some(notice));

        let notice_slot = self.notice;
        let notice_seq = self.notice_seq;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            if notice_seq.get_untracked() == seq {
                notice_slot.set(None);
            }
        });
    }
}
