//! # holmen-form — Contact Form Orchestration
//!
//! Wires the pure rules of `holmen-core` and the state machines of
//! `holmen-state` to the page through narrow ports. Nothing in this crate
//! knows about a rendering surface; a browser binding, the CLI, and the tests
//! each inject their own adapters.
//!
//! ## Components
//!
//! - `ContactFormController` — honeypot check, validation, busy state,
//!   submission, and reporting for one form.
//! - `StatusPresenter` — at most one transient message, auto-dismissed after
//!   the configured lifetime.
//! - `ConsentBanner` — delayed cookie banner backed by a key-value store.
//! - `DelayedSubmitter` — fixed-delay stand-in for a real submission service.
//!
//! ## Execution Model
//!
//! Everything runs on one cooperative tokio task. The submission call is the
//! only suspension point inside the controller. Timers are spawned tasks
//! whose handles abort on cancellation. No lock is held across an `.await`.

pub mod config;
pub mod consent;
pub mod controller;
pub mod memory;
pub mod ports;
pub mod presenter;
pub mod stand_in;
pub mod timer;

pub use config::FormConfig;
pub use consent::{ConsentBanner, ConsentError};
pub use controller::{ContactFormController, SubmitOutcome};
pub use memory::{MemoryBannerView, MemoryStore, MemorySurface};
pub use ports::{BannerView, FormSurface, KeyValueStore};
pub use presenter::StatusPresenter;
pub use stand_in::DelayedSubmitter;
pub use timer::TimerHandle;
