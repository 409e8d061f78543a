//! Injectable locale-construction capability.
//!
//! The conformance harness reaches the locale library only through
//! `LocaleProvider`, so tests can substitute a mock that returns canned
//! collation lists or fails construction for chosen tags.

use crate::error::IntlResult;
use crate::locale::Locale;

/// Capability interface for constructing locales and reading their
/// collation lists.
pub trait LocaleProvider {
    /// Construct a locale value from a BCP 47 tag.
    ///
    /// Failures follow the provider's own validation rules and are not
    /// translated by callers.
    fn locale_for_tag(&self, tag: &str) -> IntlResult<Locale>;

    /// The ordered collation-type list of a locale (may be empty).
    ///
    /// Calling this twice on the same locale yields the same sequence.
    fn collations_of(&self, locale: &Locale) -> Vec<String>;
}

/// Default provider backed by the built-in keyword tables
#[derive(Debug, Clone, Default)]
pub struct BuiltinLocaleProvider;

impl BuiltinLocaleProvider {
    /// Create a new provider
    pub fn new() -> Self {
        BuiltinLocaleProvider
    }
}

impl LocaleProvider for BuiltinLocaleProvider {
    fn locale_for_tag(&self, tag: &str) -> IntlResult<Locale> {
        Locale::new(tag)
    }

    fn collations_of(&self, locale: &Locale) -> Vec<String> {
        locale.collations()
    }
}
