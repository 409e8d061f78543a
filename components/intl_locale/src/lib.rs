//! ECMAScript Internationalization API locale-info surface
//!
//! This crate provides the locale-side collaborators for the conformance
//! harness:
//! - Locale: BCP 47 language tag parsing and canonical display form
//! - Keyword lists: collations, calendars, hour cycles, numbering systems
//! - LocaleProvider: injectable locale-construction capability
//!
//! # Example
//!
//! ```
//! use intl_locale::Locale;
//!
//! let locale = Locale::new("de-u-co-phonebk").unwrap();
//! assert_eq!(locale.language, "de");
//! assert_eq!(locale.collations(), vec!["phonebk".to_string()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod keywords;
pub mod locale;
pub mod provider;

// Re-export main types for convenience
pub use error::{IntlError, IntlResult};
pub use locale::Locale;
pub use provider::{BuiltinLocaleProvider, LocaleProvider};
