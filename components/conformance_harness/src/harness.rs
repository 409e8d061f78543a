use crate::report::SweepReport;
use intl_locale::{IntlResult, Locale, LocaleProvider};
use regex::Regex;

/// Lexical pattern for a Unicode extension `type` value: one or more
/// hyphen-separated segments of 3-8 alphanumeric ASCII characters.
pub const TYPE_PATTERN: &str = "^[a-zA-Z0-9]{3,8}(-[a-zA-Z0-9]{3,8})*$";

/// Compiled predicate for the `type` grammar
#[derive(Debug, Clone)]
pub struct TypeGrammar {
    pattern: Regex,
}

impl TypeGrammar {
    /// Compile the grammar
    pub fn new() -> Self {
        TypeGrammar {
            pattern: Regex::new(TYPE_PATTERN).unwrap(),
        }
    }

    /// Check a single token against the grammar
    pub fn matches(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }
}

impl Default for TypeGrammar {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of checking a single locale tag
#[derive(Debug, Clone, PartialEq)]
pub enum SweepResult {
    /// Every collation token matched the grammar
    Pass,
    /// A token failed the grammar, with reason
    Fail(String),
}

impl SweepResult {
    /// Check if the result is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, SweepResult::Pass)
    }

    /// Check if the result is a failure
    pub fn is_fail(&self) -> bool {
        matches!(self, SweepResult::Fail(_))
    }
}

/// Alphabet the sweep enumerates candidate language subtags from
const A_TO_Z: &str = "abcdefghijklmnopqrstuvwxyz";

/// Collations conformance sweep over all two-letter locale tags
///
/// The sweep visits all 676 ordered letter pairs ("aa" through "zz") in
/// lexicographic order, constructs a locale for each through the provider,
/// and checks every collation token against the `type` grammar. The first
/// failing tag aborts the sweep; provider errors end the run unchanged.
pub struct CollationsSweep<P: LocaleProvider> {
    provider: P,
    grammar: TypeGrammar,
    verbose: bool,
}

impl<P: LocaleProvider> CollationsSweep<P> {
    /// Create a sweep over the given provider
    pub fn new(provider: P) -> Self {
        CollationsSweep {
            provider,
            grammar: TypeGrammar::new(),
            verbose: true,
        }
    }

    /// Enable or disable per-locale diagnostic printing
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Get the grammar predicate used by this sweep
    pub fn grammar(&self) -> &TypeGrammar {
        &self.grammar
    }

    /// Check the collation list of a single tag
    pub fn check_tag(&self, tag: &str) -> IntlResult<SweepResult> {
        let locale = self.provider.locale_for_tag(tag)?;
        Ok(self.check_locale(&locale))
    }

    /// Check the collation list of an already constructed locale
    pub fn check_locale(&self, locale: &Locale) -> SweepResult {
        let collations = self.provider.collations_of(locale);
        for token in &collations {
            if !self.grammar.matches(token) {
                return SweepResult::Fail(format!(
                    "{}.collations [{}] does not meet 'type: alphanum{{3,8}}(sep alphanum{{3,8}})*'",
                    locale,
                    collations.join(",")
                ));
            }
        }
        SweepResult::Pass
    }

    /// Run the full sweep
    ///
    /// Visits every tag in order and stops at the first failing one. The
    /// returned report covers the tags actually visited.
    pub fn run(&self) -> IntlResult<SweepReport> {
        let mut report = SweepReport::new();

        for first in A_TO_Z.chars() {
            for second in A_TO_Z.chars() {
                let tag = format!("{}{}", first, second);
                let locale = self.provider.locale_for_tag(&tag)?;

                if self.verbose {
                    println!("{}", locale);
                }

                let result = self.check_locale(&locale);
                let failed = result.is_fail();
                report.add_result(&tag, result);
                if failed {
                    return Ok(report);
                }
            }
        }

        Ok(report)
    }
}
