use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for caption track language codes
///
/// Caption tracks are tagged with BCP-47-like codes ("en", "en-US", "pt-BR").
/// These helpers reduce such tags to their primary ISO 639 subtag for
/// matching and for English display names.
/// Primary language subtag of a BCP-47-like code ("en-US" -> "en")
pub fn primary_subtag(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_lowercase()
}

fn lookup(subtag: &str) -> Option<Language> {
    match subtag.len() {
        2 => Language::from_639_1(subtag),
        3 => Language::from_639_3(subtag),
        _ => None,
    }
}

/// Check whether two language codes name the same primary language
///
/// Region subtags are ignored, so "en" matches "en-US". Two-letter and
/// three-letter ISO codes for the same language also match.
pub fn language_codes_match(a: &str, b: &str) -> bool {
    let (a, b) = (primary_subtag(a), primary_subtag(b));
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    match (lookup(&a), lookup(&b)) {
        (Some(lang_a), Some(lang_b)) => lang_a == lang_b,
        _ => false,
    }
}

/// English name for a language code, for display next to the raw tag
pub fn get_language_name(code: &str) -> Result<String> {
    let subtag = primary_subtag(code);
    lookup(&subtag)
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}
