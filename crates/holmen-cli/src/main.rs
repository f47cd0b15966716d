//! # holmen CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use holmen_cli::consent::{run_consent, ConsentArgs};
use holmen_cli::filter::{run_filter, FilterArgs};
use holmen_cli::phone::{run_format_phone, FormatPhoneArgs};
use holmen_cli::submit::{run_submit, SubmitArgs};
use holmen_cli::validate::{run_validate, ValidateArgs};

/// Håndverker Holmen AS site tools.
///
/// Validates and submits contact form enquiries, records cookie consent, and
/// previews the phone input and project filter behaviour of the site.
#[derive(Parser, Debug)]
#[command(name = "holmen", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Without it, RUST_LOG applies, falling back to `info`.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check contact form values and print the first failure.
    Validate(ValidateArgs),

    /// Validate and submit a contact form enquiry.
    Submit(SubmitArgs),

    /// Record or inspect the cookie consent choice.
    Consent(ConsentArgs),

    /// Rewrite a phone number the way the phone field does while typing.
    FormatPhone(FormatPhoneArgs),

    /// Show which project cards a filter button displays.
    Filter(FilterArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Submit(args) => run_submit(&args),
        Commands::Consent(args) => run_consent(&args),
        Commands::FormatPhone(args) => run_format_phone(&args),
        Commands::Filter(args) => run_filter(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
