//! Key resolution and placeholder interpolation
//!
//! Resolution walks a dotted key such as `"commands.start.welcome"` through a
//! bundle and substitutes `{name}` placeholders from the supplied parameters.
//! Anything that does not resolve to a displayable, truthy value is shown as
//! the key itself.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use super::cache::Bundle;

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid")
});

/// Get the value at a dotted key path
pub fn lookup<'a>(bundle: &'a Bundle, key: &str) -> Option<&'a Value> {
    let mut segments = key.split('.');
    let first = segments.next()?;

    segments.try_fold(bundle.get(first)?, step)
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        // Only canonical indices: "01" names no element
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .filter(|index| index.to_string() == segment)
            .and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Whether a value counts as present for display purposes
///
/// `null`, `false`, the empty string, and numeric zero are not; a key mapped
/// to any of them renders as the key.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Substitute `{name}` placeholders in a single pass
///
/// Unknown names stay as written, braces included. Substituted values are
/// not scanned again.
pub fn interpolate(template: &str, params: &TranslationParams) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Resolve a key against a bundle and format it with parameters
pub fn translate(bundle: Option<&Bundle>, key: &str, params: &TranslationParams) -> String {
    let value = match bundle.and_then(|b| lookup(b, key)) {
        Some(value) if is_truthy(value) => value,
        _ => return key.to_string(),
    };

    match value {
        Value::String(template) => interpolate(template, params),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Objects and arrays are branches of the tree, not messages
        _ => key.to_string(),
    }
}
