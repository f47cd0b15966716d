//! # Submit Subcommand
//!
//! Runs one complete submit action over command-line field values: honeypot
//! check, validation, busy state, submission, and the resulting status
//! message.
//!
//! Submissions go to the HTTP endpoint given by `--endpoint` or
//! `HOLMEN_SUBMIT_URL`. Without either, the fixed-delay stand-in
//! acknowledges them.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use holmen_client::{HttpSubmissionClient, SubmissionConfig};
use holmen_core::SubmissionService;
use holmen_form::{
    ContactFormController, DelayedSubmitter, FormConfig, MemorySurface, SubmitOutcome,
};

use crate::fields::ContactArgs;

/// Label of the submit control on the contact page.
const SUBMIT_LABEL: &str = "Send forespørsel";

/// Arguments for the `holmen submit` subcommand.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub fields: ContactArgs,

    /// Receiving endpoint. Overrides HOLMEN_SUBMIT_URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Bearer token for the endpoint. Overrides HOLMEN_SUBMIT_TOKEN.
    #[arg(long)]
    pub token: Option<String>,

    /// Request timeout in seconds. Overrides HOLMEN_SUBMIT_TIMEOUT_SECS.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Delay of the stand-in service when no endpoint is configured.
    #[arg(long, default_value_t = 1500)]
    pub stand_in_delay_ms: u64,
}

/// Execute the submit subcommand.
///
/// Returns exit code: 0 when submitted (or silently dropped as a bot), 1 when
/// validation failed, 2 when the service failed.
pub fn run_submit(args: &SubmitArgs) -> Result<u8> {
    submit_with_env(args, |var| std::env::var(var).ok())
}

/// [`run_submit`] with environment variables read through `env`.
fn submit_with_env(args: &SubmitArgs, env: impl Fn(&str) -> Option<String>) -> Result<u8> {
    let config = FormConfig {
        stand_in_delay: Duration::from_millis(args.stand_in_delay_ms),
        ..FormConfig::default()
    };
    let surface = Arc::new(args.fields.surface(SUBMIT_LABEL));
    let runtime = crate::runtime()?;

    let outcome = match resolve_endpoint(args, &env)? {
        Some(submission_config) => {
            tracing::debug!(?submission_config, "submitting over HTTP");
            let client = HttpSubmissionClient::new(submission_config)
                .context("failed to build submission client")?;
            runtime.block_on(submit_once(&surface, client, &config))
        }
        None => {
            tracing::debug!(delay = ?config.stand_in_delay, "no endpoint configured, using stand-in");
            let stand_in = DelayedSubmitter::new(config.stand_in_delay);
            runtime.block_on(submit_once(&surface, stand_in, &config))
        }
    };

    for message in surface.messages() {
        println!("{message}");
    }
    Ok(exit_code(&outcome))
}

async fn submit_once<S: SubmissionService>(
    surface: &Arc<MemorySurface>,
    service: S,
    config: &FormConfig,
) -> SubmitOutcome {
    let controller = ContactFormController::new(Arc::clone(surface), service, config);
    let outcome = controller.handle_submit().await;
    if let SubmitOutcome::Submitted(ack) = &outcome {
        if let Some(reference) = &ack.reference {
            println!("reference: {reference}");
        }
    }
    outcome
}

/// Endpoint configuration from flags, falling back to the environment.
fn resolve_endpoint(
    args: &SubmitArgs,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<Option<SubmissionConfig>> {
    let base = match &args.endpoint {
        Some(endpoint) => Some(SubmissionConfig::for_endpoint(endpoint)?),
        None if env("HOLMEN_SUBMIT_URL").is_some() => Some(SubmissionConfig::from_lookup(env)?),
        None => None,
    };

    Ok(base.map(|mut config| {
        if let Some(token) = &args.token {
            config = config.with_token(token.clone());
        }
        if let Some(secs) = args.timeout_secs {
            config = config.with_timeout_secs(secs);
        }
        config
    }))
}

fn exit_code(outcome: &SubmitOutcome) -> u8 {
    match outcome {
        SubmitOutcome::Submitted(_) | SubmitOutcome::BotRejected | SubmitOutcome::Ignored => 0,
        SubmitOutcome::Invalid(_) => 1,
        SubmitOutcome::Failed(_) => 2,
    }
}
