//! Built-in keyword data tables for the locale-info getters.
//!
//! The tables are a small approximation of the CLDR preferred-value data:
//! enough coverage for the common languages, with a sensible default for
//! everything else. Values follow the Unicode extension `type` lexical
//! rule (3-8 alphanumeric characters per hyphen-separated segment).

/// Preferred collation types for a language, sorted.
///
/// Per ECMA-402 the list never contains `standard` or `search`; those are
/// selected through the collator options, not advertised by the locale.
pub fn collations_for(language: &str) -> Vec<String> {
    let preferred: &[&str] = match language {
        "zh" => &["big5han", "gb2312", "pinyin", "stroke", "unihan", "zhuyin"],
        "de" => &["phonebk"],
        "es" => &["trad"],
        "fi" => &["trad"],
        "sv" => &["reformed"],
        "ja" | "ko" => &["unihan"],
        "ar" => &["compat"],
        "si" => &["dict"],
        _ => &[],
    };

    // Every locale advertises the root collations as well.
    let mut values: Vec<String> = preferred.iter().map(|s| s.to_string()).collect();
    values.push("emoji".to_string());
    values.push("eor".to_string());
    values.sort();
    values
}

/// Supported calendars for a language, sorted with the default first.
pub fn calendars_for(language: &str) -> Vec<String> {
    let calendars: &[&str] = match language {
        "th" => &["buddhist", "gregory"],
        "ja" => &["gregory", "japanese"],
        "zh" => &["gregory", "chinese"],
        "ko" => &["gregory", "dangi"],
        "he" => &["gregory", "hebrew"],
        "fa" => &["persian", "gregory"],
        "ar" => &["gregory", "islamic", "islamic-civil", "islamic-tbla"],
        "am" | "ti" => &["gregory", "ethiopic"],
        "hi" | "mr" | "ta" | "te" => &["gregory", "indian"],
        _ => &["gregory"],
    };
    calendars.iter().map(|s| s.to_string()).collect()
}

/// Preferred hour cycles for a language.
pub fn hour_cycles_for(language: &str) -> Vec<String> {
    let cycles: &[&str] = match language {
        "en" | "ar" | "hi" | "ko" | "es" | "pt" => &["h12"],
        _ => &["h23"],
    };
    cycles.iter().map(|s| s.to_string()).collect()
}

/// Default numbering systems for a language.
pub fn numbering_systems_for(language: &str) -> Vec<String> {
    let systems: &[&str] = match language {
        "ar" => &["arab"],
        "fa" => &["arabext"],
        "bn" | "as" => &["beng"],
        "mr" | "ne" => &["deva"],
        "my" => &["mymr"],
        _ => &["latn"],
    };
    systems.iter().map(|s| s.to_string()).collect()
}

/// Likely script subtag for a language, for locale maximization.
pub fn likely_script_for(language: &str) -> &'static str {
    match language {
        "zh" => "Hans",
        "ja" => "Jpan",
        "ko" => "Kore",
        "ar" | "fa" | "ur" => "Arab",
        "ru" | "uk" | "bg" => "Cyrl",
        "he" => "Hebr",
        "hi" | "mr" | "ne" => "Deva",
        "th" => "Thai",
        _ => "Latn",
    }
}

/// Likely region subtag for a language, for locale maximization.
pub fn likely_region_for(language: &str) -> &'static str {
    match language {
        "en" => "US",
        "zh" => "CN",
        "ja" => "JP",
        "ko" => "KR",
        "de" => "DE",
        "fr" => "FR",
        "es" => "ES",
        "it" => "IT",
        "pt" => "BR",
        "ru" => "RU",
        "ar" => "SA",
        "hi" => "IN",
        "th" => "TH",
        "he" => "IL",
        // World
        _ => "001",
    }
}
