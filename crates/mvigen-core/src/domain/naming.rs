//! Feature-name casing transforms.
//!
//! # Design
//!
//! These are total, deterministic string functions — no caching, no state.
//! Every generator recomputes the derived names from the raw feature name on
//! each run, so one input always yields the same folder/class/constant names
//! across every emitted file.
//!
//! Splitting rule (shared by all three transforms): strip everything outside
//! `[A-Za-z0-9]` to a word boundary, then additionally break before every
//! uppercase letter. `"Forget Password"`, `"forget-password"` and
//! `"forgetPassword"` all split to `["forget", "password"]`-shaped word lists.

/// Split a raw name into words on non-alphanumerics and uppercase boundaries.
fn split_words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in raw.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_ascii_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert to `camelCase` — the generated feature *folder* and variable name.
///
/// `"Forget Password"` → `"forgetPassword"`, `"user_profile"` → `"userProfile"`.
/// Degenerate input (nothing alphanumeric) collapses to the empty string;
/// rejecting blank names is the caller's job, not this module's.
pub fn to_camel(raw: &str) -> String {
    let words = split_words(raw);
    let mut iter = words.iter();

    let mut out = match iter.next() {
        Some(first) => first.to_ascii_lowercase(),
        None => return String::new(),
    };
    for word in iter {
        out.push_str(&capitalize_first(word));
    }
    out
}

/// Convert to `PascalCase` — the generated *type name* stem.
///
/// `"forget password"` → `"ForgetPassword"`.
pub fn to_pascal(raw: &str) -> String {
    split_words(raw)
        .iter()
        .map(|w| capitalize_first(w))
        .collect()
}

/// Convert to `lower_snake_case`.
///
/// The screen generator uppercases this and appends `_ROUTE` to build the
/// route constant name, so the output must never contain anything a Kotlin
/// identifier would reject.
pub fn to_snake(raw: &str) -> String {
    split_words(raw)
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
