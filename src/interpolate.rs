//! Placeholder token substitution.
//! The interpolation primitive is an injected capability so hosts can swap
//! in their own engine; the default works on flat `{{key}}` tokens.

use indexmap::IndexMap;
use regex::{Captures, Regex};

/// Capability used to substitute placeholder tokens in file content.
pub trait Interpolate {
    /// Replaces every recognized token in `text` with its value from `data`.
    /// Tokens whose key is absent from `data` are left unchanged.
    fn interpolate(&self, text: &str, data: &IndexMap<String, String>) -> String;
}

/// Default engine for `{{key}}` tokens.
///
/// Substitution is a single pass over the input: values are inserted
/// literally and never rescanned, so content produced by one substitution
/// cannot trigger another within the same call.
pub struct TokenInterpolator {
    token: Regex,
}

impl TokenInterpolator {
    pub fn new() -> Self {
        // Keys are bare identifiers, optionally dotted or dashed; inner
        // padding as in `{{ key }}` is accepted.
        let token = Regex::new(r"\{\{\s*([A-Za-z0-9_][A-Za-z0-9_.-]*)\s*\}\}").unwrap();
        Self { token }
    }
}

impl Default for TokenInterpolator {
    fn default() -> Self {
        TokenInterpolator::new()
    }
}

impl Interpolate for TokenInterpolator {
    fn interpolate(&self, text: &str, data: &IndexMap<String, String>) -> String {
        self.token
            .replace_all(text, |caps: &Captures| match data.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_token() {
        let engine = TokenInterpolator::new();
        let data = IndexMap::from([("name".to_string(), "stamp".to_string())]);

        assert_eq!(engine.interpolate("hi {{ name }}!", &data), "hi stamp!");
    }

    #[test]
    fn test_malformed_braces_untouched() {
        let engine = TokenInterpolator::new();
        let data = IndexMap::from([("a".to_string(), "x".to_string())]);

        assert_eq!(engine.interpolate("{{}} {a} {{ }}", &data), "{{}} {a} {{ }}");
    }
}
