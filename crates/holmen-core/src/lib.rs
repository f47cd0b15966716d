//! # holmen-core — Foundational Types for the Contact Form
//!
//! This crate is the leaf of the Holmen workspace. It holds the pure domain
//! logic of the site's contact form: which fields exist, how a submission is
//! assembled, the ordered validation rules, and the user-facing Norwegian
//! texts. Nothing here touches a page, a timer, or the network.
//!
//! ## Key Design Principles
//!
//! 1. **Typed field identifiers.** `FieldId` names every form field. No bare
//!    element-id strings outside this crate.
//!
//! 2. **One message per attempt.** `validate()` runs the rules in a fixed
//!    order (required → phone → email) and stops at the first failure.
//!
//! 3. **Honeypot excluded by construction.** `FormSubmission` never carries
//!    the `website` field.
//!
//! 4. **Ports live at the leaf.** `SubmissionService` is defined here so that
//!    adapter crates depend on `holmen-core` only.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `holmen-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod consent;
pub mod error;
pub mod field;
pub mod filter;
pub mod phone;
pub mod service;
pub mod status;
pub mod submission;
pub mod text;
pub mod validation;

// Re-export primary types for ergonomic imports.
pub use consent::{ConsentChoice, CONSENT_STORAGE_KEY};
pub use error::{HolmenError, StoreError, SubmissionError, ValidationError};
pub use field::FieldId;
pub use filter::ProjectFilter;
pub use phone::{format_phone_input, NorwegianPhone};
pub use service::{Ack, SubmissionService};
pub use status::{MessageId, StatusKind, StatusMessage};
pub use submission::FormSubmission;
pub use validation::{validate, ContactFields, Rule, ValidationResult};
