//! # Filter Subcommand
//!
//! Decides which project cards a filter button shows.

use anyhow::Result;
use clap::Args;

use holmen_core::ProjectFilter;

/// Marker for a card without a category.
const NO_CATEGORY: &str = "-";

/// Arguments for the `holmen filter` subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// The button's filter value; `all` shows every card.
    #[arg(value_name = "FILTER")]
    pub filter: String,

    /// Category of each card in page order. Use `-` for a card without one.
    #[arg(value_name = "CATEGORY")]
    pub categories: Vec<String>,
}

/// Execute the filter subcommand. Always returns exit code 0.
pub fn run_filter(args: &FilterArgs) -> Result<u8> {
    let filter = ProjectFilter::parse(&args.filter);
    let visibility = card_visibility(&filter, &args.categories);
    for (category, visible) in args.categories.iter().zip(visibility) {
        println!("{category}\t{}", if visible { "shown" } else { "hidden" });
    }
    Ok(0)
}

fn card_visibility(filter: &ProjectFilter, categories: &[String]) -> Vec<bool> {
    filter.visibility(
        categories
            .iter()
            .map(|c| (c != NO_CATEGORY).then_some(c.as_str())),
    )
}
