//! Arithmetic evaluation of a pending operand pair.

use super::state::Operation;

/// Evaluate `previous <operation> current`, returning the result as text.
///
/// Operands are parsed as `f64` with locale-free decimal parsing. If either
/// operand is absent or does not parse as a number, the result is the empty
/// string: "not yet computable", never an error. Division follows IEEE-754
/// semantics without special-casing, so a zero divisor yields `"inf"`,
/// `"-inf"` or `"NaN"` rather than failing.
///
/// The result is `f64`'s canonical shortest text form: integral results carry
/// no fractional part (`"8"`, not `"8.0"`) and no custom rounding is applied.
///
/// # Example
///
/// ```rust
/// use tallypad::{evaluate, Operation};
///
/// assert_eq!(evaluate(Some("5"), Some("3"), Operation::Add), "8");
/// assert_eq!(evaluate(Some("5"), Some("0"), Operation::Divide), "inf");
/// assert_eq!(evaluate(None, Some("3"), Operation::Add), "");
/// ```
pub fn evaluate(previous: Option<&str>, current: Option<&str>, operation: Operation) -> String {
    let (Some(prev), Some(cur)) = (parse_operand(previous), parse_operand(current)) else {
        return String::new();
    };

    let result = match operation {
        Operation::Add => prev + cur,
        Operation::Subtract => prev - cur,
        Operation::Multiply => prev * cur,
        Operation::Divide => prev / cur,
    };

    result.to_string()
}

/// An operand that parses to NaN (e.g. a stored `"NaN"` result) is not a
/// number to compute with, so it counts as unparseable.
fn parse_operand(text: Option<&str>) -> Option<f64> {
    let value: f64 = text?.parse().ok()?;
    (!value.is_nan()).then_some(value)
}
