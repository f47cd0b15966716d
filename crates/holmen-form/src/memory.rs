//! # In-Memory Adapters
//!
//! Port implementations backed by plain data, for tests and the CLI. They
//! behave like the page: messages are inserted before existing content, and
//! removing a message that is not present reports `false`.

use std::collections::{BTreeMap, HashMap};

use parking_lot::Mutex;

use holmen_core::{FieldId, MessageId, StatusMessage, StoreError};

use crate::ports::{BannerView, FormSurface, KeyValueStore};

/// Observable state of a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceState {
    pub fields: BTreeMap<FieldId, String>,
    /// Named fields the form carries beyond the known ones, in form order.
    pub extra: Vec<(String, String)>,
    pub submit_label: String,
    pub busy: bool,
    /// Rendered messages, first child first.
    pub messages: Vec<StatusMessage>,
    /// Total messages ever inserted.
    pub inserted: usize,
    /// Total messages actually removed.
    pub removed: usize,
}

/// A contact form held in memory.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceState>,
}

impl MemorySurface {
    /// An empty form whose submit control carries `submit_label`.
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                submit_label: submit_label.into(),
                ..SurfaceState::default()
            }),
        }
    }

    /// Builder-style field assignment.
    pub fn with_field(self, id: FieldId, value: impl Into<String>) -> Self {
        self.state.lock().fields.insert(id, value.into());
        self
    }

    /// Builder-style assignment of a field outside [`FieldId`].
    pub fn with_named_field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.state.lock().extra.push((name.into(), value.into()));
        self
    }

    /// Copy of the full surface state.
    pub fn snapshot(&self) -> SurfaceState {
        self.state.lock().clone()
    }

    /// Messages currently rendered.
    pub fn messages(&self) -> Vec<StatusMessage> {
        self.state.lock().messages.clone()
    }
}

impl FormSurface for MemorySurface {
    fn field(&self, id: FieldId) -> String {
        self.state.lock().fields.get(&id).cloned().unwrap_or_default()
    }

    fn set_field(&self, id: FieldId, value: &str) {
        self.state.lock().fields.insert(id, value.to_string());
    }

    fn named_fields(&self) -> Vec<(String, String)> {
        let state = self.state.lock();
        FieldId::ALL
            .iter()
            .map(|id| {
                let value = state.fields.get(id).cloned().unwrap_or_default();
                (id.as_str().to_string(), value)
            })
            .chain(state.extra.iter().cloned())
            .collect()
    }

    fn reset_fields(&self) {
        let mut state = self.state.lock();
        for id in FieldId::ALL {
            state.fields.insert(id, String::new());
        }
        state.extra.iter_mut().for_each(|(_, value)| value.clear());
    }

    fn submit_label(&self) -> String {
        self.state.lock().submit_label.clone()
    }

    fn set_submit_label(&self, label: &str) {
        self.state.lock().submit_label = label.to_string();
    }

    fn set_control_busy(&self, busy: bool) {
        self.state.lock().busy = busy;
    }

    fn insert_message(&self, message: &StatusMessage) {
        let mut state = self.state.lock();
        state.messages.insert(0, message.clone());
        state.inserted += 1;
    }

    fn remove_message(&self, id: MessageId) -> bool {
        let mut state = self.state.lock();
        match state.messages.iter().position(|m| m.id == id) {
            Some(index) => {
                state.messages.remove(index);
                state.removed += 1;
                true
            }
            None => false,
        }
    }
}

/// A key-value store held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style pre-population.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.lock().insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A banner element held in memory. Records every visibility change.
#[derive(Debug, Default)]
pub struct MemoryBannerView {
    history: Mutex<Vec<bool>>,
}

impl MemoryBannerView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the banner is currently visible. Starts hidden.
    pub fn is_visible(&self) -> bool {
        self.history.lock().last().copied().unwrap_or(false)
    }

    /// Every visibility change, oldest first.
    pub fn history(&self) -> Vec<bool> {
        self.history.lock().clone()
    }
}

impl BannerView for MemoryBannerView {
    fn set_visible(&self, visible: bool) {
        self.history.lock().push(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_inserted_first() {
        let s = MemorySurface::new("Send");
        let a = StatusMessage::error("a");
        let b = StatusMessage::error("b");
        s.insert_message(&a);
        s.insert_message(&b);
        let ids: Vec<_> = s.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[test]
    fn removing_absent_message_reports_false() {
        let s = MemorySurface::new("Send");
        let m = StatusMessage::success("ok");
        s.insert_message(&m);
        assert!(s.remove_message(m.id));
        assert!(!s.remove_message(m.id));
        assert_eq!(s.snapshot().removed, 1);
    }

    #[test]
    fn named_fields_cover_every_field() {
        let s = MemorySurface::new("Send").with_field(FieldId::Name, "Ola");
        let named = s.named_fields();
        assert_eq!(named.len(), FieldId::ALL.len());
        assert_eq!(named[0], ("name".to_string(), "Ola".to_string()));
        assert!(named.iter().any(|(k, _)| k == "website"));
    }

    #[test]
    fn store_round_trip() {
        let store = MemoryStore::new().with_entry("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));
        store.set("b", "2").unwrap();
        assert_eq!(store.get("b").as_deref(), Some("2"));
        assert_eq!(store.get("c"), None);
    }

    #[test]
    fn banner_view_tracks_visibility() {
        let v = MemoryBannerView::new();
        assert!(!v.is_visible());
        v.set_visible(true);
        v.set_visible(false);
        assert_eq!(v.history(), vec![true, false]);
        assert!(!v.is_visible());
    }
}
