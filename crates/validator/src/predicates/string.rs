//! String content predicates

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Nullable, Predicate};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

/// Passes when the value is present and has a non-whitespace character.
///
/// # Examples
///
/// ```
/// use field_validator::predicates::not_blank;
///
/// let name = not_blank::<Option<String>>();
/// assert!(name.test(&Some("Ann".into())));
/// assert!(!name.test(&Some(" \t".into())));
/// assert!(!name.test(&None));
/// ```
#[must_use]
pub fn not_blank<V>() -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
    V::Value: AsRef<str>,
{
    Predicate::new(|value: &V| {
        value
            .value()
            .is_some_and(|s| !s.as_ref().trim().is_empty())
    })
}

/// Passes when the whole value matches `pattern`.
///
/// The match is anchored at both ends, so `pattern("[0-9]+")` rejects
/// `"a1"`. The expression is compiled once, here.
///
/// # Errors
///
/// Returns the regex error when `pattern` does not compile.
///
/// # Examples
///
/// ```
/// use field_validator::predicates::pattern;
///
/// let zip = pattern::<String>(r"\d{5}").unwrap();
/// assert!(zip.test(&"12345".to_string()));
/// assert!(!zip.test(&"123456".to_string()));
/// ```
pub fn pattern<V>(pattern: &str) -> Result<Predicate<V>, regex::Error>
where
    V: Nullable + ?Sized + 'static,
    V::Value: AsRef<str>,
{
    let regex = Regex::new(&format!("^(?:{pattern})$"))?;
    Ok(matches(regex))
}

/// Passes when the value is a syntactically valid email address.
#[must_use]
pub fn email<V>() -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
    V::Value: AsRef<str>,
{
    matches(EMAIL_REGEX.clone())
}

fn matches<V>(regex: Regex) -> Predicate<V>
where
    V: Nullable + ?Sized + 'static,
    V::Value: AsRef<str>,
{
    Predicate::new(move |value: &V| value.value().is_some_and(|s| regex.is_match(s.as_ref())))
}

// ============================================================================
// TESTS
// ============================================================================
