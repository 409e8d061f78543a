//! Unit tests for the collations sweep

use conformance_harness::{CollationsSweep, SweepResult};
use intl_locale::{BuiltinLocaleProvider, IntlError, IntlResult, Locale, LocaleProvider};

/// Provider returning the same canned collation list for every locale
struct FixedProvider {
    collations: Vec<String>,
}

impl FixedProvider {
    fn new(collations: &[&str]) -> Self {
        FixedProvider {
            collations: collations.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LocaleProvider for FixedProvider {
    fn locale_for_tag(&self, tag: &str) -> IntlResult<Locale> {
        Locale::new(tag)
    }

    fn collations_of(&self, _locale: &Locale) -> Vec<String> {
        self.collations.clone()
    }
}

/// Provider that fails construction for one chosen tag
struct PoisonedProvider {
    poison: String,
}

impl LocaleProvider for PoisonedProvider {
    fn locale_for_tag(&self, tag: &str) -> IntlResult<Locale> {
        if tag == self.poison {
            Err(IntlError::range_error(format!(
                "Invalid language tag: {}",
                tag
            )))
        } else {
            Locale::new(tag)
        }
    }

    fn collations_of(&self, locale: &Locale) -> Vec<String> {
        locale.collations()
    }
}

#[test]
fn test_sweep_passes_with_well_formed_tokens() {
    let mut sweep = CollationsSweep::new(FixedProvider::new(&["phonebk", "emoji", "eor"]));
    sweep.set_verbose(false);

    let report = sweep.run().unwrap();
    assert_eq!(report.total, 676);
    assert_eq!(report.passed, 676);
    assert!(report.is_success());
}

#[test]
fn test_sweep_passes_with_empty_collation_list() {
    let mut sweep = CollationsSweep::new(FixedProvider::new(&[]));
    sweep.set_verbose(false);

    let report = sweep.run().unwrap();
    assert_eq!(report.passed, 676);
}

#[test]
fn test_sweep_stops_at_first_violation() {
    let mut sweep = CollationsSweep::new(FixedProvider::new(&["ok"]));
    sweep.set_verbose(false);

    let report = sweep.run().unwrap();
    // Every tag yields the bad token, so the sweep aborts on the very first
    assert_eq!(report.total, 1);
    assert_eq!(report.failed, 1);
    assert!(!report.is_success());
    assert_eq!(report.failures[0].0, "aa");
}

#[test]
fn test_failure_reason_names_locale_and_full_list() {
    let sweep = CollationsSweep::new(FixedProvider::new(&["phonebk", "a_b", "eor"]));

    let result = sweep.check_tag("de").unwrap();
    match result {
        SweepResult::Fail(reason) => {
            assert!(reason.contains("de.collations"));
            assert!(reason.contains("[phonebk,a_b,eor]"));
            assert!(reason.contains("does not meet"));
        }
        SweepResult::Pass => panic!("expected a grammar violation"),
    }
}

#[test]
fn test_construction_error_propagates() {
    let mut sweep = CollationsSweep::new(PoisonedProvider {
        poison: "ab".to_string(),
    });
    sweep.set_verbose(false);

    let err = sweep.run().unwrap_err();
    assert!(err.message.contains("Invalid language tag: ab"));
}

#[test]
fn test_check_tag_with_builtin_provider() {
    let sweep = CollationsSweep::new(BuiltinLocaleProvider::new());

    assert!(sweep.check_tag("en").unwrap().is_pass());
    assert!(sweep.check_tag("aa").unwrap().is_pass());
    assert!(sweep.check_tag("zz").unwrap().is_pass());
}

#[test]
fn test_check_tag_propagates_bad_tag() {
    let sweep = CollationsSweep::new(BuiltinLocaleProvider::new());
    assert!(sweep.check_tag("").is_err());
}

#[test]
fn test_check_locale_uses_extension_override() {
    let sweep = CollationsSweep::new(BuiltinLocaleProvider::new());
    let locale = Locale::new("de-u-co-phonebk").unwrap();

    assert!(sweep.check_locale(&locale).is_pass());
}

#[test]
fn test_grammar_accessor() {
    let sweep = CollationsSweep::new(BuiltinLocaleProvider::new());
    assert!(sweep.grammar().matches("pinyin"));
    assert!(!sweep.grammar().matches("no"));
}
