//! Numeric checks

use crate::coerce::{parse_float_prefix, to_number};

/// The value must be a number as a whole, not just start with one.
///
/// Passes when coercing the entire string and reading its leading float
/// both produce numbers whose difference is itself a number. That rejects
/// `"12abc"` (coercion fails), `""` (no leading float) and `"Infinity"`
/// (infinity minus infinity).
pub fn numeric(value: &str, _option: Option<&str>) -> bool {
    numeric_value(value).is_some()
}

/// The value must be numeric and at least the option.
pub fn min_number(value: &str, option: Option<&str>) -> bool {
    compare_with_option(value, option, |value, bound| value >= bound)
}

/// The value must be numeric and at most the option.
pub fn max_number(value: &str, option: Option<&str>) -> bool {
    compare_with_option(value, option, |value, bound| value <= bound)
}

fn numeric_value(value: &str) -> Option<f64> {
    let whole = to_number(value)?;
    let leading = parse_float_prefix(value)?;
    if (whole - leading).is_nan() {
        None
    } else {
        Some(whole)
    }
}

fn compare_with_option(value: &str, option: Option<&str>, cmp: fn(f64, f64) -> bool) -> bool {
    let Some(number) = numeric_value(value) else {
        return false;
    };

    match option.and_then(parse_float_prefix) {
        Some(bound) => cmp(number, bound),
        None => false,
    }
}
