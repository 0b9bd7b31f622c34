//! Composable single-value rules.
//!
//! A [`Rule`] is a pure check returning an error message on failure. Rules
//! are combined per field with [`validate_field`], which runs all of them.

use std::fmt;

use crate::result::ValidationResult;

pub struct Rule<T: ?Sized> {
    check: Box<dyn Fn(&T) -> Option<String> + Send + Sync>,
}

impl<T: ?Sized> Rule<T> {
    pub fn new(check: impl Fn(&T) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            check: Box::new(check),
        }
    }

    /// Error message if `value` breaks the rule.
    pub fn check(&self, value: &T) -> Option<String> {
        (self.check)(value)
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rule")
    }
}

/// Numeric types the range rules accept.
pub trait Bound: Copy + PartialOrd + Default + fmt::Display + Send + Sync + 'static {}

impl<T> Bound for T where T: Copy + PartialOrd + Default + fmt::Display + Send + Sync + 'static {}

/// Run every rule against `value`; one entry per failing rule.
pub fn validate_field<T: ?Sized>(field: &str, value: &T, rules: &[Rule<T>]) -> ValidationResult {
    let mut result = ValidationResult::new();
    for rule in rules {
        if let Some(message) = rule.check(value) {
            result.add_error(field, message);
        }
    }
    result
}

/// Fails on blank text. An empty `message` selects the generic one.
pub fn required(message: &str) -> Rule<str> {
    let message = if message.is_empty() {
        "this field is required".to_string()
    } else {
        message.to_string()
    };
    Rule::new(move |value: &str| value.trim().is_empty().then(|| message.clone()))
}

/// Minimum length in characters, ignoring surrounding whitespace.
pub fn min_length(min: usize) -> Rule<str> {
    Rule::new(move |value: &str| {
        (value.trim().chars().count() < min).then(|| format!("must be at least {min} characters"))
    })
}

pub fn max_length(max: usize) -> Rule<str> {
    Rule::new(move |value: &str| {
        (value.chars().count() > max).then(|| format!("must be at most {max} characters"))
    })
}

/// Inclusive range.
pub fn int_range<T: Bound>(min: T, max: T) -> Rule<T> {
    Rule::new(move |value: &T| {
        (*value < min || *value > max).then(|| format!("must be between {min} and {max}"))
    })
}

pub fn int_min<T: Bound>(min: T) -> Rule<T> {
    Rule::new(move |value: &T| (*value < min).then(|| format!("must be at least {min}")))
}

pub fn int_max<T: Bound>(max: T) -> Rule<T> {
    Rule::new(move |value: &T| (*value > max).then(|| format!("must be at most {max}")))
}

pub fn positive<T: Bound>() -> Rule<T> {
    Rule::new(|value: &T| (*value <= T::default()).then(|| "must be a positive number".to_string()))
}

pub fn non_negative<T: Bound>() -> Rule<T> {
    Rule::new(|value: &T| (*value < T::default()).then(|| "must be zero or greater".to_string()))
}

pub fn year_range<T: Bound>(min: T, max: T) -> Rule<T> {
    Rule::new(move |value: &T| {
        (*value < min || *value > max).then(|| format!("year must be between {min} and {max}"))
    })
}

pub fn month_range<T: Bound + From<u8>>() -> Rule<T> {
    int_range(T::from(1), T::from(12))
}

pub fn day_range<T: Bound + From<u8>>() -> Rule<T> {
    int_range(T::from(1), T::from(31))
}

pub fn rgb_component<T: Bound + From<u8>>() -> Rule<T> {
    int_range(T::from(0), T::from(255))
}

pub fn one_of<T: Bound>(allowed: impl Into<Vec<T>>) -> Rule<T> {
    let allowed = allowed.into();
    let listed = allowed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Rule::new(move |value: &T| {
        (!allowed.contains(value)).then(|| format!("must be one of: {listed}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_uses_given_or_default_message() {
        assert_eq!(
            required("Team name is required").check("  "),
            Some("Team name is required".to_string())
        );
        assert_eq!(
            required("").check(""),
            Some("this field is required".to_string())
        );
        assert_eq!(required("").check("x"), None);
    }

    #[test]
    fn lengths_count_characters() {
        assert_eq!(min_length(2).check(" a "), Some("must be at least 2 characters".into()));
        assert_eq!(min_length(2).check("ab"), None);
        assert_eq!(max_length(5).check("Zoë12"), None);
        assert_eq!(max_length(5).check("abcdef"), Some("must be at most 5 characters".into()));
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        let rule = int_range(60, 90);
        assert_eq!(rule.check(&60), None);
        assert_eq!(rule.check(&90), None);
        assert_eq!(rule.check(&59), Some("must be between 60 and 90".into()));
        assert_eq!(rule.check(&91), Some("must be between 60 and 90".into()));
    }

    #[test]
    fn single_sided_bounds() {
        assert_eq!(int_min(3_i64).check(&2), Some("must be at least 3".into()));
        assert_eq!(int_max(3_i64).check(&4), Some("must be at most 3".into()));
        assert_eq!(positive::<i32>().check(&0), Some("must be a positive number".into()));
        assert_eq!(positive::<i32>().check(&1), None);
        assert_eq!(non_negative::<i32>().check(&0), None);
        assert_eq!(non_negative::<i32>().check(&-1), Some("must be zero or greater".into()));
    }

    #[test]
    fn calendar_and_color_rules() {
        assert_eq!(
            year_range(1920, 2020).check(&1919),
            Some("year must be between 1920 and 2020".into())
        );
        assert!(month_range::<i32>().check(&13).is_some());
        assert!(month_range::<i32>().check(&0).is_some());
        assert!(day_range::<i64>().check(&31).is_none());
        assert!(rgb_component::<i32>().check(&256).is_some());
        assert!(rgb_component::<i32>().check(&0).is_none());
    }

    #[test]
    fn one_of_lists_allowed_values() {
        let rule = one_of([0, 2, 4]);
        assert_eq!(rule.check(&2), None);
        assert_eq!(rule.check(&3), Some("must be one of: 0, 2, 4".into()));
    }

    #[test]
    fn validate_field_does_not_short_circuit() {
        let result = validate_field(
            "Abbreviation",
            "",
            &[required("Abbreviation is required"), min_length(2), max_length(5)],
        );
        assert_eq!(result.len(), 2);
        assert_eq!(result.errors()[0].message, "Abbreviation is required");
        assert_eq!(result.errors()[1].message, "must be at least 2 characters");
    }
}
