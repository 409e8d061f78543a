//! Locale-Info Conformance Harness
//!
//! This crate provides a harness that sweeps every two-lowercase-letter
//! locale tag, reads each locale's collation-type list from a
//! `LocaleProvider`, and checks every token against the Unicode extension
//! `type` grammar.

pub mod harness;
pub mod report;

pub use harness::{CollationsSweep, SweepResult, TypeGrammar, TYPE_PATTERN};
pub use report::SweepReport;
