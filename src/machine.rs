//! Imperative shell around the pure reducer core.
//!
//! A [`Calculator`] owns exactly one [`CalculatorState`] and replaces it on
//! every dispatched action. `dispatch` takes `&mut self`, so even with
//! several input sources (keyboard plus on-screen buttons) the borrow rules
//! force actions through one at a time, in order, against the latest state —
//! the single-writer serialization the display contract depends on.

use crate::core::{
    apply, format_operand_with, parse_script, Action, CalculatorState, GroupingConfig, Operation,
    UnknownKey,
};
use serde::{Deserialize, Serialize};

/// Snapshot of the two-line calculator readout.
///
/// Produced on demand by [`Calculator::readout`]; formatting is a render-time
/// concern and is never written back into the state.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Readout {
    /// Formatted previous operand, if one is captured.
    pub previous: Option<String>,
    /// The pending operation, if one is chosen.
    pub operation: Option<Operation>,
    /// Formatted current operand, if anything is entered.
    pub current: Option<String>,
}

impl Readout {
    /// Upper display line: the captured operand followed by the pending
    /// operation symbol, e.g. `"1,234 +"`.
    pub fn upper_line(&self) -> String {
        match (&self.previous, self.operation) {
            (Some(previous), Some(operation)) => format!("{previous} {operation}"),
            (Some(previous), None) => previous.clone(),
            (None, Some(operation)) => operation.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Lower display line: the operand currently being typed or displayed.
    pub fn lower_line(&self) -> &str {
        self.current.as_deref().unwrap_or("")
    }
}

/// A calculator session: the single writer of one `CalculatorState`.
///
/// # Example
///
/// ```rust
/// use tallypad::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.run_script("1234.5+765.5=").unwrap();
/// assert_eq!(calc.readout().lower_line(), "2,000");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    grouping: GroupingConfig,
}

impl Calculator {
    /// Create a calculator in the empty initial state with default
    /// comma grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with an explicit grouping configuration.
    pub fn with_grouping(grouping: GroupingConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            grouping,
        }
    }

    /// Apply one action, replacing the owned state with the reducer's
    /// result. Infallible: the reducer is total.
    pub fn dispatch(&mut self, action: Action) {
        self.state = apply(std::mem::take(&mut self.state), action);
    }

    /// Translate one key press and dispatch it.
    ///
    /// An unknown key leaves the state untouched.
    pub fn press(&mut self, key: char) -> Result<(), UnknownKey> {
        self.dispatch(Action::from_key(key)?);
        Ok(())
    }

    /// Translate and dispatch a whole key script, e.g. `"12+7="`.
    ///
    /// The script is parsed up front, so an unknown key anywhere in it
    /// leaves the state untouched.
    pub fn run_script(&mut self, script: &str) -> Result<(), UnknownKey> {
        for action in parse_script(script)? {
            self.dispatch(action);
        }
        Ok(())
    }

    /// The current state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Reset to the empty initial state.
    pub fn reset(&mut self) {
        self.dispatch(Action::Clear);
    }

    /// Render the two-line readout from the current state.
    pub fn readout(&self) -> Readout {
        Readout {
            previous: format_operand_with(&self.grouping, self.state.previous.as_deref()),
            operation: self.state.operation,
            current: format_operand_with(&self.grouping, self.state.current.as_deref()),
        }
    }
}
