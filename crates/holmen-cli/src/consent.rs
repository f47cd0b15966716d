//! # Consent Subcommand
//!
//! Records or inspects the visitor's cookie choice in a JSON file store.
//!
//! ## Subcommands
//!
//! - `accept` / `decline` — Run the banner against the store and record the
//!   choice. A choice that is already stored is never overwritten.
//! - `status` — Print the stored choice.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Subcommand};

use holmen_core::{ConsentChoice, CONSENT_STORAGE_KEY};
use holmen_form::{ConsentBanner, ConsentError, FormConfig, KeyValueStore, MemoryBannerView};

use crate::store::JsonFileStore;

/// Arguments for the `holmen consent` subcommand.
#[derive(Args, Debug)]
pub struct ConsentArgs {
    /// JSON file holding the visitor's stored values.
    #[arg(long, default_value = "holmen-store.json")]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: ConsentCommand,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConsentCommand {
    /// Accept cookies.
    Accept,
    /// Decline cookies.
    Decline,
    /// Print the stored choice.
    Status,
}

/// Execute the consent subcommand.
///
/// Returns exit code: 0 on success, 1 when a choice was already recorded, 2
/// when the store refused the choice.
pub fn run_consent(args: &ConsentArgs) -> Result<u8> {
    let store = Arc::new(JsonFileStore::new(&args.store));
    let choice = match args.command {
        ConsentCommand::Accept => ConsentChoice::Accepted,
        ConsentCommand::Decline => ConsentChoice::Declined,
        ConsentCommand::Status => {
            println!("{}", describe(store.get(CONSENT_STORAGE_KEY)));
            return Ok(0);
        }
    };

    let view = Arc::new(MemoryBannerView::new());
    let banner = ConsentBanner::new(store, view, FormConfig::default().banner_delay);
    let decided = crate::runtime()?.block_on(async {
        banner.start();
        banner.decide(choice)
    });

    match decided {
        Ok(()) => {
            println!("{choice}");
            Ok(0)
        }
        Err(ConsentError::Transition(e)) => {
            tracing::debug!("consent not recorded: {e}");
            println!("already recorded: {}", banner.state().name().to_lowercase());
            Ok(1)
        }
        Err(e @ ConsentError::NotPersisted { .. }) => {
            tracing::error!(store = %args.store.display(), "{e}");
            println!("not recorded: {choice}");
            Ok(2)
        }
    }
}

fn describe(stored: Option<String>) -> String {
    match stored.as_deref() {
        None | Some("") => "unset".to_string(),
        Some(value) => match value.parse::<ConsentChoice>() {
            Ok(choice) => choice.to_string(),
            Err(e) => e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(store: PathBuf, command: ConsentCommand) -> ConsentArgs {
        ConsentArgs { store, command }
    }

    #[test]
    fn accept_is_persisted_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        assert_eq!(run_consent(&args(path.clone(), ConsentCommand::Accept)).unwrap(), 0);
        let store = JsonFileStore::new(&path);
        assert_eq!(store.get(CONSENT_STORAGE_KEY).as_deref(), Some("accepted"));

        assert_eq!(run_consent(&args(path.clone(), ConsentCommand::Decline)).unwrap(), 1);
        assert_eq!(store.get(CONSENT_STORAGE_KEY).as_deref(), Some("accepted"));
    }

    #[test]
    fn unwritable_store_fails_the_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(run_consent(&args(path.clone(), ConsentCommand::Accept)).unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn status_describes_stored_value() {
        assert_eq!(describe(None), "unset");
        assert_eq!(describe(Some(String::new())), "unset");
        assert_eq!(describe(Some("declined".into())), "declined");
        assert!(describe(Some("maybe".into())).contains("maybe"));
    }
}
