//! User actions and the keypad translation boundary.
//!
//! The reducer only ever sees well-formed [`Action`] values. Translating raw
//! host input (a key press, a button id) into an `Action` is the one fallible
//! step, and it happens here.

use super::state::Operation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single keypad entry character: the ten digits plus the decimal point.
///
/// Modeling entry characters as a closed enum means the reducer never has to
/// re-validate operand text character by character.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    /// The decimal point key. At most one may appear in an operand.
    Point,
}

impl Digit {
    /// Parse an entry character. Returns `None` for anything outside
    /// `0-9` and `.`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            '.' => Some(Self::Point),
            _ => None,
        }
    }

    /// The character appended to the operand text.
    pub fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Point => '.',
        }
    }

    pub(crate) fn is_point(self) -> bool {
        matches!(self, Self::Point)
    }

    pub(crate) fn is_zero(self) -> bool {
        matches!(self, Self::Zero)
    }
}

/// A discrete user action driving the calculator.
///
/// This is the closed input alphabet of the state machine; the reducer's
/// dispatch over it is exhaustive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    /// Append (or, after an evaluation, start) a digit of the current operand.
    AddDigit(Digit),
    /// Select the pending binary operation.
    ChooseOperation(Operation),
    /// Reset to the empty initial state.
    Clear,
    /// Remove the last entered character of the current operand.
    DeleteDigit,
    /// Compute the pending expression and display the result.
    Evaluate,
}

/// A key that does not map to any calculator action.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("key '{0}' does not map to a calculator action")]
pub struct UnknownKey(pub char);

impl Action {
    /// Translate a single key press into an action.
    ///
    /// This is the headless equivalent of the button wiring in a calculator
    /// UI: `0-9` and `.` enter digits, `+ - * ÷` (with `/`, `x` and `×`
    /// accepted as aliases for the last two) choose operations, `=` or Enter
    /// evaluates, `c`/`C` clears, and backspace, delete or `<` deletes one
    /// character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tallypad::{Action, Digit, Operation};
    ///
    /// assert_eq!(Action::from_key('7'), Ok(Action::AddDigit(Digit::Seven)));
    /// assert_eq!(
    ///     Action::from_key('/'),
    ///     Ok(Action::ChooseOperation(Operation::Divide))
    /// );
    /// assert!(Action::from_key('q').is_err());
    /// ```
    pub fn from_key(key: char) -> Result<Self, UnknownKey> {
        if let Some(digit) = Digit::from_char(key) {
            return Ok(Self::AddDigit(digit));
        }
        match key {
            '+' => Ok(Self::ChooseOperation(Operation::Add)),
            '-' => Ok(Self::ChooseOperation(Operation::Subtract)),
            '*' | 'x' | '×' => Ok(Self::ChooseOperation(Operation::Multiply)),
            '/' | '÷' => Ok(Self::ChooseOperation(Operation::Divide)),
            '=' | '\n' | '\r' => Ok(Self::Evaluate),
            'c' | 'C' => Ok(Self::Clear),
            '<' | '\u{8}' | '\u{7f}' => Ok(Self::DeleteDigit),
            other => Err(UnknownKey(other)),
        }
    }
}

/// Translate a whole key string into an ordered action sequence.
///
/// Whitespace is skipped; the first unknown key aborts the parse, so either
/// the entire script is translated or none of it is.
///
/// # Example
///
/// ```rust
/// use tallypad::{apply_all, parse_script, CalculatorState};
///
/// let actions = parse_script("12 + 7 =").unwrap();
/// let state = apply_all(CalculatorState::new(), actions);
/// assert_eq!(state.current.as_deref(), Some("19"));
/// ```
pub fn parse_script(script: &str) -> Result<Vec<Action>, UnknownKey> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Action::from_key)
        .collect()
}
