// File: src/coerce.rs
// Purpose: Browser-compatible string to number coercion

use once_cell::sync::Lazy;
use regex::Regex;

// Whole-string decimal literal, after trimming
static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal literal pattern is valid")
});

// Longest leading float, the way parseFloat reads it
static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("float prefix pattern is valid")
});

static INT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").expect("int prefix pattern is valid"));

/// Coerce a whole string into a number.
///
/// Mirrors what a browser does for `Number(text)`: surrounding whitespace is
/// ignored, an empty string is zero, and anything that is not a complete
/// numeric literal (decimal, `Infinity`, or an unsigned `0x`/`0o`/`0b`
/// integer) yields `None`.
pub fn to_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = radix_literal(text) {
        return Some(value);
    }

    if DECIMAL_LITERAL.is_match(text) {
        return text.parse::<f64>().ok();
    }

    None
}

/// Parse the longest leading float in `text`, ignoring leading whitespace.
///
/// `"12abc"` gives `12`, `"abc"` and `""` give `None`.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let matched = FLOAT_PREFIX.find(text)?.as_str();

    match matched.trim_start_matches(['+', '-']) {
        "Infinity" if matched.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => matched.parse::<f64>().ok(),
    }
}

/// Parse the leading base-10 integer in `text`, ignoring leading whitespace.
///
/// `"8"`, `" 8"` and `"8px"` all give `8`; `"px"` gives `None`.
pub fn parse_int_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let matched = INT_PREFIX.find(text)?.as_str();
    matched.parse::<f64>().ok()
}

fn radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };

    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}
