//! BCP 47 language tag parsing and the locale-info getters.
//!
//! A `Locale` is parsed once from a tag string and is immutable afterwards.
//! The keyword getters (`collations`, `calendars`, `hour_cycles`,
//! `numbering_systems`) derive their lists from the built-in tables unless
//! the tag carried an explicit `-u-` extension keyword for that key.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{IntlError, IntlResult};
use crate::keywords;

/// BCP 47 language tag representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Primary language subtag (e.g., "en", "fr", "de")
    pub language: String,
    /// Optional script subtag (e.g., "Latn", "Hans")
    pub script: Option<String>,
    /// Optional region subtag (e.g., "US", "GB", "DE")
    pub region: Option<String>,
    /// Unicode extension keywords (e.g., "co" for collation, "nu" for numbering system)
    pub extensions: BTreeMap<String, String>,
}

impl Locale {
    /// Create a new Locale from a BCP 47 language tag string
    ///
    /// # Arguments
    /// * `tag` - A BCP 47 language tag (e.g., "en-US", "de-u-co-phonebk")
    ///
    /// # Examples
    /// ```
    /// use intl_locale::Locale;
    ///
    /// let locale = Locale::new("en-US").unwrap();
    /// assert_eq!(locale.language, "en");
    /// assert_eq!(locale.region, Some("US".to_string()));
    /// ```
    pub fn new(tag: &str) -> IntlResult<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(IntlError::range_error("Invalid language tag: empty string"));
        }

        let mut parts: Vec<&str> = tag.split('-').collect();
        let mut extensions = BTreeMap::new();

        // Parse language subtag (required)
        let language = parts.remove(0).to_lowercase();
        if !Self::is_valid_language(&language) {
            return Err(IntlError::range_error(format!(
                "Invalid language subtag: {}",
                language
            )));
        }

        let mut script = None;
        let mut region = None;

        // Parse remaining subtags
        let mut i = 0;
        while i < parts.len() {
            let part = parts[i];

            // Unicode extension sequence: -u-key-value pairs
            if part == "u" && i + 1 < parts.len() {
                i += 1;
                while i < parts.len() {
                    let key = parts[i];
                    if key.len() == 2 && key.chars().all(|c| c.is_ascii_alphanumeric()) {
                        if i + 1 < parts.len() && parts[i + 1].len() > 2 {
                            extensions.insert(key.to_lowercase(), parts[i + 1].to_lowercase());
                            i += 2;
                        } else {
                            extensions.insert(key.to_lowercase(), "true".to_string());
                            i += 1;
                        }
                    } else {
                        break;
                    }
                }
                continue;
            }

            // Script subtag: 4 letters, title case
            if script.is_none() && part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                let (head, tail) = part.split_at(1);
                script = Some(format!("{}{}", head.to_uppercase(), tail.to_lowercase()));
                i += 1;
                continue;
            }

            // Region subtag: 2 letters (uppercase) or 3 digits
            if region.is_none() {
                if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                    region = Some(part.to_uppercase());
                    i += 1;
                    continue;
                } else if part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()) {
                    region = Some(part.to_string());
                    i += 1;
                    continue;
                }
            }

            // Skip unknown subtags
            i += 1;
        }

        Ok(Locale {
            language,
            script,
            region,
            extensions,
        })
    }

    /// Check if a language subtag is valid (2-3 lowercase letters)
    fn is_valid_language(lang: &str) -> bool {
        (lang.len() == 2 || lang.len() == 3) && lang.chars().all(|c| c.is_ascii_lowercase())
    }

    /// Get the base name (language, script, and region without extensions)
    pub fn base_name(&self) -> String {
        let mut result = self.language.clone();
        if let Some(ref script) = self.script {
            result.push('-');
            result.push_str(script);
        }
        if let Some(ref region) = self.region {
            result.push('-');
            result.push_str(region);
        }
        result
    }

    /// Maximize the locale by adding likely subtags
    pub fn maximize(&self) -> Self {
        let mut result = self.clone();

        if result.script.is_none() {
            result.script = Some(keywords::likely_script_for(&result.language).to_string());
        }
        if result.region.is_none() {
            result.region = Some(keywords::likely_region_for(&result.language).to_string());
        }

        result
    }

    /// Minimize the locale by removing likely subtags
    pub fn minimize(&self) -> Self {
        Locale {
            language: self.language.clone(),
            script: None,
            region: None,
            extensions: self.extensions.clone(),
        }
    }

    /// The collation types in use for this locale, sorted.
    ///
    /// A `-u-co-<type>` extension pins the list to that single type;
    /// otherwise the language's preferred list is returned. The list never
    /// contains `standard` or `search`.
    pub fn collations(&self) -> Vec<String> {
        match self.extensions.get("co") {
            Some(value) if value != "true" => vec![value.clone()],
            _ => keywords::collations_for(&self.language),
        }
    }

    /// The calendars in use for this locale.
    pub fn calendars(&self) -> Vec<String> {
        match self.extensions.get("ca") {
            Some(value) if value != "true" => vec![value.clone()],
            _ => keywords::calendars_for(&self.language),
        }
    }

    /// The hour cycles in use for this locale.
    pub fn hour_cycles(&self) -> Vec<String> {
        match self.extensions.get("hc") {
            Some(value) if value != "true" => vec![value.clone()],
            _ => keywords::hour_cycles_for(&self.language),
        }
    }

    /// The numbering systems in use for this locale.
    pub fn numbering_systems(&self) -> Vec<String> {
        match self.extensions.get("nu") {
            Some(value) if value != "true" => vec![value.clone()],
            _ => keywords::numbering_systems_for(&self.language),
        }
    }
}

impl fmt::Display for Locale {
    /// Canonical BCP 47 tag form, extension keys in sorted order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_name())?;

        if !self.extensions.is_empty() {
            write!(f, "-u")?;
            for (key, value) in &self.extensions {
                write!(f, "-{}", key)?;
                if value != "true" {
                    write!(f, "-{}", value)?;
                }
            }
        }

        Ok(())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            language: "en".to_string(),
            script: None,
            region: Some("US".to_string()),
            extensions: BTreeMap::new(),
        }
    }
}
