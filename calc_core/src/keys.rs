//! # Key Translation
//!
//! Maps raw keypad characters and short word commands onto calculator
//! actions. Front ends translate their own events into [`Key`] and hand it
//! to [`Engine::dispatch`](crate::engine::Engine::dispatch).
//!
//! | Input | Key |
//! |-------|-----|
//! | `0`-`9`, `.` | `Digit` |
//! | `+ - * / x × ÷` | `Operator` |
//! | `=`, Enter | `Equals` |
//! | `c`, `C` | `Clear` |
//! | `s`, `S` | `ToggleSafeDivision` |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Operator;
use crate::errors::{CalcError, CalcResult};

/// A calculator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum Key {
    /// A digit `0`-`9` or the decimal point
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    /// Set safe division explicitly
    SafeDivision(bool),
    /// Flip safe division
    ToggleSafeDivision,
}

impl Key {
    /// Translate a single keypad character.
    pub fn from_char(ch: char) -> CalcResult<Key> {
        if ch.is_ascii_digit() || ch == '.' {
            return Ok(Key::Digit(ch));
        }
        if let Some(op) = Operator::from_char(ch) {
            return Ok(Key::Operator(op));
        }
        match ch {
            '=' | '\n' | '\r' => Ok(Key::Equals),
            'c' | 'C' => Ok(Key::Clear),
            's' | 'S' => Ok(Key::ToggleSafeDivision),
            _ => Err(CalcError::invalid_input("key", ch.to_string(), "Unknown key")),
        }
    }

    /// Translate one line of input into keys.
    ///
    /// A line is either a word command (`clear`, `ac`, `equals`, `safe on`,
    /// `safe off`, `safe`, or an operator name) or a run of keypad characters
    /// such as `12.5*4=`. Whitespace between keypad characters is ignored.
    ///
    /// ```rust
    /// use calc_core::keys::Key;
    /// use calc_core::engine::Operator;
    ///
    /// assert_eq!(Key::parse_line("safe off").unwrap(), vec![Key::SafeDivision(false)]);
    /// assert_eq!(
    ///     Key::parse_line("5 / 0 =").unwrap(),
    ///     vec![Key::Digit('5'), Key::Operator(Operator::Divide), Key::Digit('0'), Key::Equals],
    /// );
    /// ```
    pub fn parse_line(line: &str) -> CalcResult<Vec<Key>> {
        let trimmed = line.trim();
        if let Ok(key) = trimmed.parse::<Key>() {
            return Ok(vec![key]);
        }

        trimmed
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(Key::from_char)
            .collect()
    }
}

impl FromStr for Key {
    type Err = CalcError;

    /// Parse a single word command.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_lowercase();
        match normalized.as_str() {
            "clear" | "ac" => Ok(Key::Clear),
            "equals" | "=" => Ok(Key::Equals),
            "safe" | "toggle" => Ok(Key::ToggleSafeDivision),
            "safe on" => Ok(Key::SafeDivision(true)),
            "safe off" => Ok(Key::SafeDivision(false)),
            word => word
                .parse::<Operator>()
                .map(Key::Operator)
                .map_err(|_| CalcError::invalid_input("command", s.trim(), "Unknown command")),
        }
    }
}
