//! # Validate Subcommand
//!
//! Runs the field rules over command-line values without submitting.

use anyhow::Result;
use clap::Args;

use holmen_core::{validate, ContactFields, ValidationResult};

use crate::fields::ContactArgs;

/// Arguments for the `holmen validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub fields: ContactArgs,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when valid, 1 with the failure message otherwise.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let code = match check(&args.fields) {
        ValidationResult::Valid => {
            println!("OK");
            0
        }
        ValidationResult::Invalid(err) => {
            println!("{}", err.message());
            1
        }
    };
    Ok(code)
}

fn check(fields: &ContactArgs) -> ValidationResult {
    validate(&ContactFields::read(|id| fields.value(id).to_string()))
}
