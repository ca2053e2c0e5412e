//! Image load-failure substitution rules.

use crate::config::PlaceholderRule;

/// Source to switch to after a load failure, if any.
///
/// `current` must be the raw `src` attribute: once swapped it equals the
/// fallback exactly, so a failing fallback is never retried.
pub fn fallback_source<'a>(current: &str, fallback: Option<&'a str>) -> Option<&'a str> {
    fallback.filter(|f| !f.is_empty() && *f != current)
}

/// Local replacement for the externally hosted placeholder image.
pub fn placeholder_source<'a>(current: &str, rule: &'a PlaceholderRule) -> Option<&'a str> {
    current
        .contains(rule.host.as_str())
        .then_some(rule.local.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_once() {
        let next = fallback_source("photo.webp", Some("photo.jpg"));
        assert_eq!(next, Some("photo.jpg"));
        assert_eq!(fallback_source("photo.jpg", Some("photo.jpg")), None);
    }

    #[test]
    fn missing_or_empty_fallback() {
        assert_eq!(fallback_source("a.png", None), None);
        assert_eq!(fallback_source("a.png", Some("")), None);
    }

    #[test]
    fn placeholder_goes_local() {
        let rule = PlaceholderRule {
            host: "placehold.co".into(),
            local: "flower.jpg".into(),
        };
        assert_eq!(
            placeholder_source("https://placehold.co/400x400?text=Flower", &rule),
            Some("flower.jpg")
        );
        assert_eq!(placeholder_source("http://localhost/flower.jpg", &rule), None);
    }
}
