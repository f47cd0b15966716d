//! # Page Ports
//!
//! The narrow read/write surfaces the form core depends on. A browser binding
//! implements them over the DOM and `localStorage`; [`crate::memory`] provides
//! in-memory versions for tests and the CLI.
//!
//! All methods take `&self`: the page is a shared surface, so implementations
//! use interior mutability. Implementations must be `Send + Sync` so timers
//! can reach them from spawned tasks.

use holmen_core::{FieldId, MessageId, StatusMessage, StoreError};

/// Read/write access to one contact form.
pub trait FormSurface: Send + Sync {
    /// Current value of a field. Missing fields read as empty.
    fn field(&self, id: FieldId) -> String;

    /// Overwrite a field's value.
    fn set_field(&self, id: FieldId, value: &str);

    /// Every named field as `(name, value)`, in form order, honeypot included.
    fn named_fields(&self) -> Vec<(String, String)>;

    /// Empty every field of the form, including fields outside [`FieldId`].
    fn reset_fields(&self);

    /// Current label of the submit control.
    fn submit_label(&self) -> String;

    /// Replace the label of the submit control.
    fn set_submit_label(&self, label: &str);

    /// Disable (`true`) or re-enable (`false`) the submit control.
    fn set_control_busy(&self, busy: bool);

    /// Render a status message before the form's existing content.
    fn insert_message(&self, message: &StatusMessage);

    /// Remove a rendered message. Returns `false` if it was not present.
    fn remove_message(&self, id: MessageId) -> bool;
}

/// Key-value persistence, used only for the consent flag.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The cookie banner element.
pub trait BannerView: Send + Sync {
    fn set_visible(&self, visible: bool);
}
