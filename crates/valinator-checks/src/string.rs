//! String checks

use once_cell::sync::Lazy;
use regex::Regex;

use crate::coerce::parse_int_prefix;
use crate::fold::fold;

static ALPHANUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("alphanumeric pattern is valid"));

// Deliberately loose: something, an @, something, a dot, something.
// "Something" excludes every line terminator, not just \n.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\n\r\x{2028}\x{2029}]+?@[^\n\r\x{2028}\x{2029}]+?\.[^\n\r\x{2028}\x{2029}]+$")
        .expect("email pattern is valid")
});

static HEX_COLOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[A-Fa-f0-9]{3}){1,2}$").expect("hex color pattern is valid")
});

static PERSON_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 /,.\-]+$").expect("person name pattern is valid"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9() +\-]+$").expect("phone pattern is valid"));

/// The value can't be empty.
///
/// Values reach checks already trimmed, so whitespace-only input fails too.
pub fn required(value: &str, _option: Option<&str>) -> bool {
    !value.trim().is_empty()
}

pub fn alphanumeric(value: &str, _option: Option<&str>) -> bool {
    ALPHANUMERIC_REGEX.is_match(value)
}

pub fn email(value: &str, _option: Option<&str>) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// `#rgb` or `#rrggbb`, either case.
pub fn hex_color(value: &str, _option: Option<&str>) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}

/// The value must have exactly as many characters as the option says.
pub fn length(value: &str, option: Option<&str>) -> bool {
    compare_length(value, option, |len, n| len == n)
}

pub fn min_length(value: &str, option: Option<&str>) -> bool {
    compare_length(value, option, |len, n| len >= n)
}

pub fn max_length(value: &str, option: Option<&str>) -> bool {
    compare_length(value, option, |len, n| len <= n)
}

/// The value must equal the option literally.
pub fn matches(value: &str, option: Option<&str>) -> bool {
    option.is_some_and(|expected| value == expected)
}

/// Letters (accents allowed), digits, spaces and `/ , . -`.
pub fn person_name(value: &str, _option: Option<&str>) -> bool {
    PERSON_NAME_REGEX.is_match(&fold(value))
}

/// Digits, spaces, parentheses, `+` and `-`.
pub fn phone(value: &str, _option: Option<&str>) -> bool {
    PHONE_REGEX.is_match(value)
}

// Lengths count characters, not bytes
fn compare_length(value: &str, option: Option<&str>, cmp: fn(f64, f64) -> bool) -> bool {
    match option.and_then(parse_int_prefix) {
        Some(n) => cmp(value.chars().count() as f64, n),
        None => false,
    }
}
