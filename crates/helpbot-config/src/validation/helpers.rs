//! Shared validation helpers used by the section validators.

use chrono::format::{Item, StrftimeItems};

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is empty or whitespace-only.
pub(crate) fn validate_not_blank(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

/// Push an error if `value` contains a specifier chrono cannot format.
pub(crate) fn validate_strftime(errors: &mut Vec<String>, name: &str, value: &str) {
    if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
        errors.push(format!("{name} = {value:?} is not a valid strftime format"));
    }
}
