// src/shared/slug.rs
use regex::Regex;
use std::sync::OnceLock;

fn non_alnum() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Lowercase the display text and collapse non-alphanumeric runs to hyphens.
///
/// `"AWS Certified"` -> `"aws-certified"`. Leading/trailing hyphens are
/// stripped so punctuation-only edges never produce dangling separators.
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    non_alnum()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Candidate sequence for collision resolution: `base`, `base-1`, `base-2`, …
///
/// Every slugged entity resolves derived-slug collisions with this sequence;
/// callers probe existence per candidate and stop at the first free one.
pub fn candidate(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}
