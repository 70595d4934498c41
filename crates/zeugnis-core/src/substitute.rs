//! Placeholder substitution
//!
//! Replaces `{name}` tokens in a template with field values in a single
//! pass. Values are inserted verbatim and never re-scanned, so a value that
//! itself contains `{endDate}` stays literal. Tokens whose name is not in
//! the supplied field set are left untouched.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap())
}

/// Field values supplied to one substitution call
pub type FieldValues = BTreeMap<&'static str, String>;

/// Substitute every known `{name}` token in `template`
///
/// # Example
///
/// ```
/// use zeugnis_core::substitute::{substitute, FieldValues};
///
/// let mut fields = FieldValues::new();
/// fields.insert("firstName", "Anna".to_string());
///
/// assert_eq!(
///     substitute("{firstName}, {firstName}! {unknown}", &fields),
///     "Anna, Anna! {unknown}"
/// );
/// ```
pub fn substitute(template: &str, fields: &FieldValues) -> String {
    placeholder_re()
        .replace_all(template, |caps: &Captures<'_>| match fields.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Names of all `{name}` tokens in `template`, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    placeholder_re()
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&'static str, &str)]) -> FieldValues {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_replaces_all_occurrences() {
        let f = fields(&[("firstName", "Anna"), ("lastName", "Keller")]);
        assert_eq!(
            substitute("{firstName} {lastName}. {firstName} was great.", &f),
            "Anna Keller. Anna was great."
        );
    }

    #[test]
    fn test_empty_value_removes_token() {
        let f = fields(&[("department", "")]);
        assert_eq!(substitute("in {department}.", &f), "in .");
    }

    #[test]
    fn test_unknown_token_untouched() {
        let f = fields(&[("firstName", "Anna")]);
        assert_eq!(substitute("{firstName} {endDate}", &f), "Anna {endDate}");
    }

    #[test]
    fn test_non_recursive() {
        let f = fields(&[("firstName", "{lastName}"), ("lastName", "Keller")]);
        assert_eq!(substitute("{firstName}", &f), "{lastName}");
    }

    #[test]
    fn test_idempotent_without_braces() {
        let f = fields(&[("firstName", "Anna")]);
        let once = substitute("Dear {firstName}", &f);
        assert_eq!(substitute(&once, &f), once);
    }

    #[test]
    fn test_non_identifier_braces_untouched() {
        let f = fields(&[("a", "x")]);
        assert_eq!(substitute("{ a } {} {1a} {a}", &f), "{ a } {} {1a} x");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("{title} {firstName} and {title}"),
            vec!["title", "firstName", "title"]
        );
        assert!(placeholders("no tokens").is_empty());
    }
}
