//! Locale-Info Conformance Runner
//!
//! Command-line entry point for the collations conformance sweep. By
//! default it sweeps all 676 two-letter locale tags against the built-in
//! locale data, printing each locale's display form as it goes, and exits
//! non-zero on the first grammar violation.

use clap::Parser;
use conformance_harness::{CollationsSweep, SweepResult};
use intl_locale::BuiltinLocaleProvider;

/// Collations conformance sweep over all two-letter locale tags
#[derive(Parser, Debug)]
#[command(name = "run_conformance", version)]
struct Cli {
    /// Check a single locale tag instead of running the full sweep
    #[arg(long)]
    tag: Option<String>,

    /// Suppress per-locale diagnostic output
    #[arg(long, short)]
    quiet: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let provider = BuiltinLocaleProvider::new();

    if let Some(tag) = cli.tag {
        let sweep = CollationsSweep::new(provider);
        match sweep.check_tag(&tag) {
            Ok(SweepResult::Pass) => {
                println!("{}: pass", tag);
            }
            Ok(SweepResult::Fail(reason)) => {
                eprintln!("{}", reason);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut sweep = CollationsSweep::new(provider);
    sweep.set_verbose(!cli.quiet && !cli.json);

    match sweep.run() {
        Ok(report) => {
            if cli.json {
                match report.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!();
                println!("{}", report.detailed_summary());
            }

            if !report.is_success() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
