//! # Format-Phone Subcommand
//!
//! Applies the telephone input rewrite to a raw value and reports whether the
//! result would pass validation.

use anyhow::Result;
use clap::Args;

use holmen_core::{format_phone_input, NorwegianPhone};

/// Arguments for the `holmen format-phone` subcommand.
#[derive(Args, Debug)]
pub struct FormatPhoneArgs {
    /// Value as typed into the phone field.
    #[arg(value_name = "RAW", allow_hyphen_values = true)]
    pub raw: String,

    /// Also report whether the formatted value is a valid Norwegian number.
    #[arg(long)]
    pub check: bool,
}

/// Execute the format-phone subcommand.
///
/// Returns exit code: 0, or 1 when `--check` is set and the result is invalid.
pub fn run_format_phone(args: &FormatPhoneArgs) -> Result<u8> {
    let formatted = format_phone_input(&args.raw);
    println!("{formatted}");

    if !args.check {
        return Ok(0);
    }
    match NorwegianPhone::parse(&formatted) {
        Ok(phone) => {
            println!("valid (national {})", phone.national());
            Ok(0)
        }
        Err(e) => {
            println!("{e}");
            Ok(1)
        }
    }
}
