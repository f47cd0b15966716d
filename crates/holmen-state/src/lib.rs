//! # holmen-state — Contact Form State Machines
//!
//! Per-form state that the page script used to infer from DOM attributes
//! (a disabled submit button, an `active` class on the banner) is made
//! explicit here. Each machine is a runtime enum with a fixed transition
//! table; every accepted transition is appended to a log with its UTC
//! timestamp and reason.
//!
//! ## State Machines
//!
//! - **Submission** (`submission.rs`): `Idle → Validating → Submitting → Done`
//!   with `Validating → Idle` for rejected attempts and `Done → Validating`
//!   for the next attempt. The controller consults it as the single
//!   in-flight guard.
//!
//! - **Consent banner** (`banner.rs`): `Unknown → Shown → Accepted | Declined`,
//!   plus `Unknown → Accepted | Declined` when a stored choice is restored or
//!   the visitor answers before the banner appears. Both decisions are
//!   terminal.

pub mod banner;
pub mod submission;
pub mod transition;

pub use banner::{BannerError, BannerState, ConsentBannerState};
pub use submission::{SubmissionLifecycle, SubmissionState, SubmissionStateError};
pub use transition::TransitionRecord;
