//! Calculator state and the pending-operation symbol set.
//!
//! `CalculatorState` is an immutable value: transitions never mutate it in
//! place, they produce a fresh value via the reducer in [`crate::core::apply`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operations the keypad offers.
///
/// The set is closed: anything outside `+ - * ÷` is rejected at the parse
/// boundary by [`Operation::from_symbol`], so the evaluator's dispatch is
/// exhaustive at compile time.
///
/// # Example
///
/// ```rust
/// use tallypad::Operation;
///
/// assert_eq!(Operation::from_symbol("÷"), Some(Operation::Divide));
/// assert_eq!(Operation::from_symbol("%"), None);
/// assert_eq!(Operation::Add.symbol(), "+");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Parse a display symbol into an operation.
    ///
    /// Recognizes exactly the four keypad symbols; returns `None` for
    /// everything else.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// The symbol shown on the upper display line while the operation is
    /// pending.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The full state of the calculator between two user actions.
///
/// Operands are held as text until evaluation so the display always reflects
/// the user's keystrokes exactly (including a trailing `.` mid-entry).
///
/// # Invariants
///
/// - `current`, while user-typed, contains only digits `0-9` and at most
///   one `.` (after an evaluation it may hold any evaluator result text).
/// - `previous` is only ever set together with `operation` by the reducer.
/// - `overwrite` is only ever set by the `Evaluate` action and consumed by
///   the next digit entry or delete.
///
/// # Example
///
/// ```rust
/// use tallypad::CalculatorState;
///
/// let state = CalculatorState::new();
/// assert!(state.is_empty());
/// assert_eq!(state, CalculatorState::default());
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// The operand currently being typed or displayed. `None` means nothing
    /// entered yet.
    pub current: Option<String>,
    /// The operand captured when an operation was chosen: raw user input or
    /// a prior computation result rendered as a string.
    pub previous: Option<String>,
    /// The pending binary operation, if one has been chosen.
    pub operation: Option<Operation>,
    /// When true, the next digit replaces `current` instead of appending.
    /// Active only immediately after an evaluation.
    pub overwrite: bool,
}

impl CalculatorState {
    /// The empty initial state: all fields absent.
    ///
    /// This is the state at machine start and after every `Clear`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the state is the empty initial state.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
