//! # Calculator Engine
//!
//! Holds the calculator state and runs the single-operator state machine.
//!
//! ## State
//!
//! ```text
//! Engine
//! ├── entry: String            number being typed, starts "0"
//! ├── pending: Option<Pending> stored operand + operator, set and cleared together
//! └── safe_division: bool      default on, survives clear()
//! ```
//!
//! ## Transitions
//!
//! ```text
//!            choose_operator              choose_operator
//!   ┌──────┐ ─────────────────> ┌─────────┐ ──┐
//!   │ Idle │                    │ Pending │   │ (overwrites operand + operator)
//!   └──────┘ <───────────────── └─────────┘ <─┘
//!            evaluate / clear
//! ```
//!
//! `append_digit` never changes the phase, only the entry text.
//!
//! Every operation returns what the screen should show; see
//! [`render`](crate::render) for the emission types.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::{Engine, Operator};
//!
//! let mut engine = Engine::new();
//! engine.append_digit('5')?;
//! engine.choose_operator(Operator::Divide);
//!
//! // Entry is still "0": safe division reports quotient and remainder
//! let render = engine.evaluate().unwrap();
//! assert_eq!(render.display, "q=0, r=5");
//! assert_eq!(render.note, "Safe mode: divisor was 0, remainder preserved");
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

pub mod division;
pub mod number_text;
pub mod operator;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::errors::{CalcError, CalcResult};
use crate::keys::Key;
use crate::render::{ModeChange, Presenter, Render, StatusStyle, StatusUpdate};
use crate::settings::Settings;

pub use division::{divide_with_remainder, QuotientRemainder};
pub use number_text::{format_number, parse_entry};
pub use operator::Operator;

/// Entry buffer contents after a reset
const ENTRY_RESET: &str = "0";

const DECIMAL_POINT: char = '.';

/// Display text when dividing by zero with safe division off
pub const ERROR_DISPLAY: &str = "Error";

/// Note shown with [`ERROR_DISPLAY`]
pub const DIVIDE_BY_ZERO_NOTE: &str = "Cannot divide by 0";

/// Note shown with a safe-division quotient/remainder report
pub const SAFE_DIVISION_NOTE: &str = "Safe mode: divisor was 0, remainder preserved";

/// Note shown when safe division is switched off
pub const UNSAFE_MODE_NOTE: &str = "Go ahead, create an error";

/// Stored first operand and the operation waiting for a second one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pending {
    pub operand: f64,
    pub operator: Operator,
}

/// Whether an operator is waiting for its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Pending,
}

/// The calculator.
///
/// One value owns the whole session state, so any number of independent
/// calculators can exist side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    entry: String,
    pending: Option<Pending>,
    safe_division: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Engine {
            entry: ENTRY_RESET.to_string(),
            pending: None,
            safe_division: true,
        }
    }
}

impl Engine {
    /// Create an engine with an empty entry and safe division enabled.
    pub fn new() -> Self {
        Engine::default()
    }

    /// Create an engine using the safe-division default from `settings`.
    pub fn with_settings(settings: &Settings) -> Self {
        Engine {
            safe_division: settings.safe_division,
            ..Engine::default()
        }
    }

    /// Current entry buffer text
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Stored operand and operator, if an operator has been chosen
    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    pub fn safe_division(&self) -> bool {
        self.safe_division
    }

    pub fn phase(&self) -> Phase {
        match self.pending {
            Some(_) => Phase::Pending,
            None => Phase::Idle,
        }
    }

    /// Status indicator for the current safe-division flag.
    pub fn status(&self) -> StatusUpdate {
        StatusStyle::from(self.safe_division).into()
    }

    /// Append a digit or the decimal point to the entry.
    ///
    /// A digit typed onto a lone `"0"` replaces it. A second decimal point
    /// is ignored: nothing changes and `Ok(None)` is returned, so the screen
    /// (and any note on it) stays as it is. Anything other than `0`-`9` or
    /// `.` is rejected and the entry is left as it was.
    pub fn append_digit(&mut self, ch: char) -> CalcResult<Option<Render>> {
        if !ch.is_ascii_digit() && ch != DECIMAL_POINT {
            warn!(key = %ch, "rejected non-digit entry key");
            return Err(CalcError::invalid_input("digit", ch.to_string(), "Expected 0-9 or '.'"));
        }

        if ch == DECIMAL_POINT && self.entry.contains(DECIMAL_POINT) {
            trace!(entry = %self.entry, "duplicate decimal point ignored");
            return Ok(None);
        }

        if self.entry == ENTRY_RESET && ch != DECIMAL_POINT {
            self.entry = ch.to_string();
        } else {
            self.entry.push(ch);
        }

        trace!(entry = %self.entry, "digit appended");
        Ok(Some(Render::display_only(self.entry.clone())))
    }

    /// Store the current entry as the first operand and wait for the second.
    ///
    /// Choosing again before evaluating replaces both the operand and the
    /// operator.
    pub fn choose_operator(&mut self, operator: Operator) -> Render {
        let operand = parse_entry(&self.entry);
        if let Some(previous) = self.pending.replace(Pending { operand, operator }) {
            debug!(previous = %previous.operator, "pending operator overwritten");
        }
        self.entry = ENTRY_RESET.to_string();

        debug!(operand, operator = %operator, "operator chosen");
        Render::new(self.entry.clone(), format!("Operator: {}", operator))
    }

    /// Apply the pending operator to the stored operand and the entry.
    ///
    /// Returns `None` without touching anything when no operator is
    /// pending. Otherwise the pending pair is always cleared, and:
    ///
    /// - a numeric result becomes the new entry, so it can be chained
    /// - dividing by zero resets the entry to `"0"` and reports either the
    ///   safe-division quotient/remainder or `Error`
    pub fn evaluate(&mut self) -> Option<Render> {
        let Pending { operand, operator } = self.pending.take()?;
        let second = parse_entry(&self.entry);

        let render = match operator {
            Operator::Divide if second == 0.0 => {
                self.entry = ENTRY_RESET.to_string();
                if self.safe_division {
                    let qr = divide_with_remainder(operand, second);
                    debug!(dividend = operand, quotient = qr.quotient, remainder = qr.remainder, "safe division by zero");
                    Render::new(qr.display_text(), SAFE_DIVISION_NOTE)
                } else {
                    debug!(dividend = operand, "division by zero with safe division off");
                    Render::new(ERROR_DISPLAY, DIVIDE_BY_ZERO_NOTE)
                }
            }
            _ => {
                let result = operator.apply(operand, second);
                self.entry = format_number(result);
                debug!(operand, operator = %operator, result, "evaluated");
                Render::display_only(self.entry.clone())
            }
        };

        Some(render)
    }

    /// Reset the entry and drop any pending operator. Safe division is kept.
    pub fn clear(&mut self) -> Render {
        self.entry = ENTRY_RESET.to_string();
        self.pending = None;
        debug!("cleared");
        Render::display_only(self.entry.clone())
    }

    /// Turn safe division on or off.
    ///
    /// Arithmetic state is untouched; the current entry is re-rendered with
    /// a note that depends on the new mode.
    pub fn set_safe_division_mode(&mut self, enabled: bool) -> ModeChange {
        self.safe_division = enabled;
        debug!(enabled, "safe division mode set");

        let note = if enabled { "" } else { UNSAFE_MODE_NOTE };
        ModeChange {
            status: self.status(),
            render: Render::new(self.entry.clone(), note),
        }
    }

    /// Run one key and forward everything it emits to `presenter`.
    ///
    /// ```rust
    /// use calc_core::engine::Engine;
    /// use calc_core::keys::Key;
    /// use calc_core::render::RecordingPresenter;
    ///
    /// let mut engine = Engine::new();
    /// let mut presenter = RecordingPresenter::default();
    ///
    /// // Nothing pending: evaluate emits nothing
    /// engine.dispatch(Key::Equals, &mut presenter)?;
    /// assert!(presenter.emissions.is_empty());
    /// # Ok::<(), calc_core::errors::CalcError>(())
    /// ```
    pub fn dispatch<P: Presenter + ?Sized>(&mut self, key: Key, presenter: &mut P) -> CalcResult<()> {
        match key {
            Key::Digit(ch) => {
                if let Some(render) = self.append_digit(ch)? {
                    presenter.render(&render);
                }
            }
            Key::Operator(op) => presenter.render(&self.choose_operator(op)),
            Key::Equals => {
                if let Some(render) = self.evaluate() {
                    presenter.render(&render);
                }
            }
            Key::Clear => presenter.render(&self.clear()),
            Key::SafeDivision(enabled) => self.emit_mode_change(enabled, presenter),
            Key::ToggleSafeDivision => self.emit_mode_change(!self.safe_division, presenter),
        }
        Ok(())
    }

    fn emit_mode_change<P: Presenter + ?Sized>(&mut self, enabled: bool, presenter: &mut P) {
        let change = self.set_safe_division_mode(enabled);
        presenter.render_status(&change.status);
        presenter.render(&change.render);
    }
}
