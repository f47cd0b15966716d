//! # holmen-cli — Command-Line Driver
//!
//! Provides the `holmen` command, which runs the contact form core from a
//! terminal:
//!
//! - `holmen validate` — Check field values and print the first failure.
//! - `holmen submit` — Run a full submit action against the HTTP client or
//!   the fixed-delay stand-in.
//! - `holmen consent` — Accept, decline, or inspect the stored cookie choice.
//! - `holmen format-phone` — Apply the telephone input rewrite to a value.
//! - `holmen filter` — Decide which project cards a filter shows.
//!
//! ```bash
//! holmen validate --name Ola --phone "998 87 766" --project-type kitchen --message hei
//! HOLMEN_SUBMIT_URL=https://forms.example.no/contact holmen submit ...
//! holmen consent --store consent.json accept
//! holmen filter kitchen kitchen bathroom -
//! ```
//!
//! Every handler returns an exit code: 0 on success, 1 when the input was
//! refused, 2 when a collaborator failed.

pub mod consent;
pub mod fields;
pub mod filter;
pub mod phone;
pub mod store;
pub mod submit;
pub mod validate;

/// Build the single-threaded runtime the async handlers run on.
pub(crate) fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
