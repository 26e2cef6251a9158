//! Display formatting for operand text.
//!
//! Formatting is applied per render and never written back into the state:
//! the stored operand stays exactly what the user typed (or the evaluator
//! produced), and grouping is a presentation concern.

use serde::{Deserialize, Serialize};

/// Thousands-grouping configuration for the integer part of an operand.
///
/// An explicit value rather than a process-wide locale, so formatting is
/// reproducible in tests and independent of the host environment.
///
/// # Example
///
/// ```rust
/// use tallypad::{format_operand_with, GroupingConfig};
///
/// let spaced = GroupingConfig {
///     separator: ' ',
///     group_size: 3,
/// };
/// assert_eq!(
///     format_operand_with(&spaced, Some("1234567")),
///     Some("1 234 567".to_string())
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// Separator inserted between digit groups.
    pub separator: char,
    /// Digits per group, counted from the right. Zero disables grouping.
    pub group_size: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            group_size: 3,
        }
    }
}

/// Format an operand with the default comma grouping.
///
/// See [`format_operand_with`] for the full contract.
///
/// # Example
///
/// ```rust
/// use tallypad::format_operand;
///
/// assert_eq!(format_operand(Some("1234567.5")), Some("1,234,567.5".to_string()));
/// assert_eq!(format_operand(Some("12.")), Some("12.".to_string()));
/// assert_eq!(format_operand(None), None);
/// ```
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    format_operand_with(&GroupingConfig::default(), operand)
}

/// Format an operand for display: the integer part gets digit grouping, the
/// fractional part is reattached verbatim.
///
/// An absent operand renders as nothing. The split is on the first `.`, and
/// an empty fractional part is kept, so a trailing bare decimal point shows
/// exactly as typed (`"12."` stays `"12."`). An empty integer part renders
/// as `"0"`, so typing `.` first shows `"0."`. Text whose integer part is
/// not a plain digit run after an optional sign (evaluator results such as
/// `"inf"` or `"NaN"`) passes through ungrouped.
pub fn format_operand_with(config: &GroupingConfig, operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    let formatted = match operand.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_integer(config, integer), fraction),
        None => group_integer(config, operand),
    };
    Some(formatted)
}

fn group_integer(config: &GroupingConfig, integer: &str) -> String {
    if integer.is_empty() {
        // A bare "." or ".5" mid-entry still shows a zero integer part.
        return "0".to_string();
    }

    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if config.group_size == 0 || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(integer.len() + digits.len() / config.group_size);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % config.group_size == 0 {
            grouped.push(config.separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(operand: &str) -> String {
        format_operand(Some(operand)).unwrap()
    }

    #[test]
    fn absent_operand_renders_nothing() {
        assert_eq!(format_operand(None), None);
    }

    #[test]
    fn groups_integer_part_by_thousands() {
        assert_eq!(fmt("0"), "0");
        assert_eq!(fmt("123"), "123");
        assert_eq!(fmt("1234"), "1,234");
        assert_eq!(fmt("1234567"), "1,234,567");
    }

    #[test]
    fn fractional_part_is_kept_verbatim() {
        assert_eq!(fmt("1234567.5"), "1,234,567.5");
        assert_eq!(fmt("1000.000100"), "1,000.000100");
    }

    #[test]
    fn trailing_decimal_point_is_preserved() {
        assert_eq!(fmt("12."), "12.");
        assert_eq!(fmt("1234."), "1,234.");
    }

    #[test]
    fn empty_integer_part_renders_zero() {
        assert_eq!(fmt("."), "0.");
        assert_eq!(fmt(".5"), "0.5");
    }

    #[test]
    fn negative_results_group_after_the_sign() {
        assert_eq!(fmt("-1234"), "-1,234");
        assert_eq!(fmt("-12.5"), "-12.5");
    }

    #[test]
    fn non_decimal_result_text_passes_through() {
        assert_eq!(fmt("inf"), "inf");
        assert_eq!(fmt("-inf"), "-inf");
        assert_eq!(fmt("NaN"), "NaN");
    }

    #[test]
    fn grouping_is_configurable() {
        let config = GroupingConfig {
            separator: '_',
            group_size: 4,
        };
        assert_eq!(
            format_operand_with(&config, Some("12345678")),
            Some("1234_5678".to_string())
        );
    }

    #[test]
    fn zero_group_size_disables_grouping() {
        let config = GroupingConfig {
            separator: ',',
            group_size: 0,
        };
        assert_eq!(
            format_operand_with(&config, Some("1234567")),
            Some("1234567".to_string())
        );
    }
}
