//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use lingo::Dictionary;

use crate::loader::load_dictionaries;
use crate::output::table::{format_coverage_table, LocaleCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Dictionary files (.json), earlier files win on conflict
    #[arg(short, long = "dictionary", required = true)]
    pub dictionaries: Vec<PathBuf>,

    /// Locales to check coverage for (comma-separated). Defaults to every
    /// locale found in the dictionaries.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Exit with non-zero code if any locale is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let dictionary = load_dictionaries(&args.dictionaries)?;
    let total = dictionary.leaves().len();

    let locales: Vec<String> = if args.lang.is_empty() {
        dictionary.locales().into_iter().map(str::to_string).collect()
    } else {
        args.lang.clone()
    };
    let coverage_data = compute_coverage(&dictionary, locales);

    // Check if any locale is incomplete
    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    // Output results
    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        // Print ASCII table
        let table = format_coverage_table(total, &coverage_data);
        println!("{}", table);

        // Print missing keys per locale
        for locale_coverage in &coverage_data {
            if !locale_coverage.missing.is_empty() {
                println!("\nMissing in {}:", locale_coverage.locale);
                for path in &locale_coverage.missing {
                    println!("  - {}", path);
                }
            }
        }
    }

    // Determine exit code
    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Count translated leaf keys per locale and collect the missing paths.
fn compute_coverage(dictionary: &Dictionary, locales: Vec<String>) -> Vec<LocaleCoverage> {
    let leaves = dictionary.leaves();
    locales
        .into_iter()
        .map(|locale| {
            let missing: Vec<String> = leaves
                .iter()
                .filter(|(_, translations)| !translations.contains_key(&locale))
                .map(|(path, _)| path.clone())
                .collect();
            LocaleCoverage {
                translated: leaves.len() - missing.len(),
                locale,
                missing,
            }
        })
        .collect()
}
