//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - State and operation definitions (`CalculatorState`, `Operation`)
//! - The action alphabet and keypad parsing (`Action`, `Digit`)
//! - The reducer (`apply`) and the arithmetic evaluator (`evaluate`)
//! - Display formatting (`format_operand`)
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy; the shell lives in
//! [`crate::machine`].

mod action;
mod evaluate;
mod format;
mod reducer;
mod state;

pub use action::{parse_script, Action, Digit, UnknownKey};
pub use evaluate::evaluate;
pub use format::{format_operand, format_operand_with, GroupingConfig};
pub use reducer::{apply, apply_all};
pub use state::{CalculatorState, Operation};
