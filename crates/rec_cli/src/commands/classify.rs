//! classify subcommand handler.

use clap::Args;
use rec_ast::GrowthCategory;

use super::OutputFormat;
use crate::json_types::{print_pretty_json, ClassifyJsonOutput};

/// Arguments for classify subcommand
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Work term to classify, e.g. "n^2 log n"
    pub term: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: ClassifyArgs) {
    let growth = rec_parser::classify(&args.term);
    match args.format {
        OutputFormat::Json => print_pretty_json(&ClassifyJsonOutput {
            ok: growth.is_known(),
            term: args.term,
            category: growth.category.as_str().to_string(),
            exponent: growth.exponent,
        }),
        OutputFormat::Text => {
            println!("Category: {}", growth.category);
            if growth.category != GrowthCategory::Unknown {
                println!("Exponent: {}", growth.power());
            }
        }
    }
}
