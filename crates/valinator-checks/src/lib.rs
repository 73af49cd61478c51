//! Valinator Checks
//!
//! Pure predicates behind the default validation checks, plus the text and
//! number helpers they share. Every check has the same shape,
//! `fn(value, option) -> bool`, so the engine crate can register them
//! directly. Cross-field checks (`matchWith`) live in the engine crate because
//! they need a field lookup.

pub mod coerce;
pub mod fold;
pub mod numeric;
pub mod string;

// Re-export all checks
pub use coerce::{parse_float_prefix, parse_int_prefix, to_number};
pub use fold::fold;
pub use numeric::*;
pub use string::*;

/// Signature shared by every check in this crate.
pub type CheckPredicate = fn(&str, Option<&str>) -> bool;

/// The default checks that need nothing but the value and its option,
/// keyed by the name used in rule maps.
pub const DEFAULT_CHECKS: &[(&str, CheckPredicate)] = &[
    ("alphanumeric", string::alphanumeric),
    ("email", string::email),
    ("hexColor", string::hex_color),
    ("length", string::length),
    ("match", string::matches),
    ("maxLength", string::max_length),
    ("maxNumber", numeric::max_number),
    ("minLength", string::min_length),
    ("minNumber", numeric::min_number),
    ("numeric", numeric::numeric),
    ("personName", string::person_name),
    ("phone", string::phone),
    ("required", string::required),
];

/// Look up a default check by its rule name.
pub fn default_check(name: &str) -> Option<CheckPredicate> {
    DEFAULT_CHECKS
        .iter()
        .find(|(check_name, _)| *check_name == name)
        .map(|(_, check)| *check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_are_unique() {
        let mut names: Vec<&str> = DEFAULT_CHECKS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_CHECKS.len());
    }

    #[test]
    fn test_default_check_lookup() {
        let required = default_check("required").expect("required is a default check");
        assert!(required("x", None));
        assert!(!required("", None));

        assert!(default_check("matchWith").is_none());
        assert!(default_check("nullable").is_none());
        assert!(default_check("Required").is_none());
    }
}
