//! Tallypad: a pure functional calculator input-and-evaluation state machine
//!
//! Tallypad models a two-line keypad calculator as a reducer: a stream of
//! discrete user actions (digit entry, operator selection, delete, clear,
//! evaluate) drives a single immutable state value through one pure, total
//! transition function. The core never errors and never mutates in place,
//! so a host UI always has a renderable state, no matter what is pressed.
//!
//! # Core Concepts
//!
//! - **Actions**: the closed input alphabet via the [`Action`] sum type
//! - **Reducer**: `apply(state, action) -> state`, pure and total
//! - **Evaluator**: arithmetic over operand text, with `""` as the
//!   "not yet computable" sentinel
//! - **Formatter**: render-time thousands grouping that is never written
//!   back into the state
//!
//! # Example
//!
//! ```rust
//! use tallypad::{apply, format_operand, Action, CalculatorState, Digit, Operation};
//!
//! let state = CalculatorState::new();
//! let state = apply(state, Action::AddDigit(Digit::Five));
//! let state = apply(state, Action::ChooseOperation(Operation::Add));
//! let state = apply(state, Action::AddDigit(Digit::Three));
//!
//! // Choosing another operator folds the pending computation: 5 + 3 = 8.
//! let state = apply(state, Action::ChooseOperation(Operation::Multiply));
//! assert_eq!(state.previous.as_deref(), Some("8"));
//!
//! let state = apply(state, Action::AddDigit(Digit::Two));
//! let state = apply(state, Action::Evaluate);
//! assert_eq!(state.current.as_deref(), Some("16"));
//!
//! assert_eq!(format_operand(state.current.as_deref()), Some("16".to_string()));
//! ```
//!
//! For hosts that prefer an owned session over threading state by hand, the
//! [`Calculator`] shell in [`machine`] serializes dispatch and renders
//! [`Readout`] snapshots.

pub mod core;
pub mod machine;

// Re-export commonly used types
pub use self::core::{
    apply, apply_all, evaluate, format_operand, format_operand_with, parse_script, Action,
    CalculatorState, Digit, GroupingConfig, Operation, UnknownKey,
};
pub use machine::{Calculator, Readout};
