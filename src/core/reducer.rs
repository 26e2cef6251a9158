//! The calculator reducer: one pure, total transition function.
//!
//! Every state/action pair yields a defined next state. Invalid or premature
//! requests (a second decimal point, evaluating half an expression) degrade
//! to returning the state unchanged, never to an error: the host always has
//! a renderable state.

use super::action::{Action, Digit};
use super::evaluate::evaluate;
use super::state::{CalculatorState, Operation};

/// Apply one user action to the state, producing the next state.
///
/// Pure and total: no side effects, no panics, and a defined result for
/// every input. The incoming state is consumed; the returned value is a
/// fresh `CalculatorState`.
///
/// # Example
///
/// ```rust
/// use tallypad::{apply, Action, CalculatorState, Digit, Operation};
///
/// let state = CalculatorState::new();
/// let state = apply(state, Action::AddDigit(Digit::Five));
/// let state = apply(state, Action::ChooseOperation(Operation::Add));
/// let state = apply(state, Action::AddDigit(Digit::Three));
/// let state = apply(state, Action::Evaluate);
///
/// assert_eq!(state.current.as_deref(), Some("8"));
/// assert!(state.overwrite);
/// ```
pub fn apply(state: CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(operation) => choose_operation(state, operation),
        Action::Clear => CalculatorState::new(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

/// Fold an ordered action sequence through [`apply`].
///
/// The headless equivalent of a host dispatching one input event at a time.
pub fn apply_all(
    state: CalculatorState,
    actions: impl IntoIterator<Item = Action>,
) -> CalculatorState {
    actions.into_iter().fold(state, apply)
}

fn add_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    // Right after an evaluation the next keystroke starts a fresh number.
    if state.overwrite {
        return CalculatorState {
            current: Some(digit.as_char().to_string()),
            overwrite: false,
            ..state
        };
    }
    // A standalone "0" cannot gain a second leading zero.
    if digit.is_zero() && state.current.as_deref() == Some("0") {
        return state;
    }
    // At most one decimal point per operand.
    if digit.is_point() && state.current.as_deref().is_some_and(|c| c.contains('.')) {
        return state;
    }

    CalculatorState {
        current: Some(format!(
            "{}{}",
            state.current.as_deref().unwrap_or(""),
            digit.as_char()
        )),
        ..state
    }
}

fn choose_operation(state: CalculatorState, operation: Operation) -> CalculatorState {
    // Nothing to operate on yet.
    if state.current.is_none() && state.previous.is_none() {
        return state;
    }
    // Operand already moved up; the user is changing the pending operator.
    if state.current.is_none() {
        return CalculatorState {
            operation: Some(operation),
            ..state
        };
    }
    // First operator: capture the typed operand as the previous operand.
    if state.previous.is_none() {
        return CalculatorState {
            previous: state.current,
            current: None,
            operation: Some(operation),
            overwrite: state.overwrite,
        };
    }

    // Chaining: fold the pending computation into the previous operand
    // before taking the new operator. Left to right, no precedence.
    CalculatorState {
        previous: Some(computed(&state)),
        current: None,
        operation: Some(operation),
        overwrite: state.overwrite,
    }
}

fn delete_digit(state: CalculatorState) -> CalculatorState {
    // Delete right after an evaluation discards the whole result.
    if state.overwrite {
        return CalculatorState {
            current: None,
            overwrite: false,
            ..state
        };
    }

    let trimmed = match state.current.as_deref() {
        None => return state,
        Some(text) if text.chars().count() <= 1 => None,
        Some(text) => {
            let mut text = text.to_string();
            text.pop();
            Some(text)
        }
    };

    CalculatorState {
        current: trimmed,
        ..state
    }
}

fn evaluate_pending(state: CalculatorState) -> CalculatorState {
    // Incomplete expression: leave the state untouched.
    if state.operation.is_none() || state.current.is_none() || state.previous.is_none() {
        return state;
    }

    CalculatorState {
        current: Some(computed(&state)),
        previous: None,
        operation: None,
        overwrite: true,
    }
}

/// Total even without a pending operation: an absent operation yields the
/// uncomputable (empty) result, same as an unparseable operand.
fn computed(state: &CalculatorState) -> String {
    match state.operation {
        Some(operation) => evaluate(
            state.previous.as_deref(),
            state.current.as_deref(),
            operation,
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::parse_script;

    /// Run a key script against the empty state.
    fn run(script: &str) -> CalculatorState {
        apply_all(CalculatorState::new(), parse_script(script).unwrap())
    }

    #[test]
    fn digits_append_to_the_current_operand() {
        assert_eq!(run("5").current.as_deref(), Some("5"));
        assert_eq!(run("123").current.as_deref(), Some("123"));
        assert_eq!(run("0.5").current.as_deref(), Some("0.5"));
    }

    #[test]
    fn redundant_leading_zero_is_suppressed() {
        let state = run("00");
        assert_eq!(state.current.as_deref(), Some("0"));
    }

    #[test]
    fn zero_point_then_digits_is_permitted() {
        assert_eq!(run("0.07").current.as_deref(), Some("0.07"));
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        assert_eq!(run("3.1.").current.as_deref(), Some("3.1"));
        assert_eq!(run("3.1.4").current.as_deref(), Some("3.14"));
    }

    #[test]
    fn point_can_start_an_operand() {
        assert_eq!(run(".5").current.as_deref(), Some(".5"));
    }

    #[test]
    fn choose_operation_with_nothing_entered_is_a_noop() {
        assert_eq!(run("+"), CalculatorState::new());
    }

    #[test]
    fn choose_operation_captures_the_first_operand() {
        let state = run("5+");
        assert_eq!(state.previous.as_deref(), Some("5"));
        assert_eq!(state.current, None);
        assert_eq!(state.operation, Some(Operation::Add));
    }

    #[test]
    fn choose_operation_with_no_current_replaces_the_operator() {
        let state = run("5+*");
        assert_eq!(state.previous.as_deref(), Some("5"));
        assert_eq!(state.current, None);
        assert_eq!(state.operation, Some(Operation::Multiply));
    }

    #[test]
    fn chained_operation_folds_the_pending_computation() {
        let state = run("5+3*");
        assert_eq!(state.previous.as_deref(), Some("8"));
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.current, None);
    }

    #[test]
    fn clear_resets_to_the_initial_state() {
        assert_eq!(run("5+3c"), CalculatorState::new());
        assert_eq!(run("5+3=c"), CalculatorState::new());
    }

    #[test]
    fn delete_on_empty_state_is_a_noop() {
        assert_eq!(run("<"), CalculatorState::new());
        // Deleting does not touch a captured previous operand.
        let state = run("5+<");
        assert_eq!(state.previous.as_deref(), Some("5"));
        assert_eq!(state.current, None);
    }

    #[test]
    fn delete_drops_the_last_character() {
        assert_eq!(run("53<").current.as_deref(), Some("5"));
        assert_eq!(run("3.1<").current.as_deref(), Some("3."));
    }

    #[test]
    fn delete_clears_a_single_character_operand() {
        assert_eq!(run("5<").current, None);
    }

    #[test]
    fn delete_discards_an_overwritten_result_entirely() {
        let state = run("5+3=<");
        assert_eq!(state.current, None);
        assert!(!state.overwrite);
    }

    #[test]
    fn evaluate_with_incomplete_expression_is_a_noop() {
        let typed = run("5");
        assert_eq!(run("5="), typed);

        let chosen = run("5+");
        assert_eq!(run("5+="), chosen);

        assert_eq!(run("="), CalculatorState::new());
    }

    #[test]
    fn evaluate_computes_and_sets_overwrite() {
        let state = run("5+3=");
        assert_eq!(state.current.as_deref(), Some("8"));
        assert_eq!(state.previous, None);
        assert_eq!(state.operation, None);
        assert!(state.overwrite);
    }

    #[test]
    fn typing_after_evaluate_starts_a_fresh_number() {
        let state = run("5+3*2=");
        assert_eq!(state.current.as_deref(), Some("16"));
        assert!(state.overwrite);

        let state = run("5+3*2=7");
        assert_eq!(state.current.as_deref(), Some("7"));
        assert!(!state.overwrite);
    }

    #[test]
    fn division_by_zero_result_is_displayed_not_raised() {
        let state = run("5/0=");
        assert_eq!(state.current.as_deref(), Some("inf"));
        assert!(state.overwrite);
    }

    #[test]
    fn uncomputable_chain_blanks_the_display() {
        // 0 ÷ 0 stores "NaN"; chaining through it yields the empty
        // "not computable" result rather than a crash.
        let state = run("0/0=+5=");
        assert_eq!(state.current.as_deref(), Some(""));
        assert_eq!(state.previous, None);
        assert_eq!(state.operation, None);
    }

    #[test]
    fn degenerate_sequences_never_panic() {
        for script in ["=====", "<<<<<", "++++", "....", "c=c<c+", ".=.=.="] {
            let _ = run(script);
        }
    }

    #[test]
    fn apply_all_matches_sequential_application() {
        let actions = parse_script("12+7=").unwrap();
        let folded = apply_all(CalculatorState::new(), actions.clone());
        let mut stepped = CalculatorState::new();
        for action in actions {
            stepped = apply(stepped, action);
        }
        assert_eq!(folded, stepped);
        assert_eq!(folded.current.as_deref(), Some("19"));
    }
}
