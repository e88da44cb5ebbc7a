//! # Division With Remainder
//!
//! Truncating division that never fails. Dividing by zero is redefined as
//! "zero full divisions, the whole dividend left over":
//!
//! ```text
//! divide_with_remainder(a, 0) = (q = 0, r = a)
//! divide_with_remainder(a, b) = (q = trunc(a / b), r = a - q * b)    b != 0
//! ```
//!
//! The remainder takes the sign of the dividend, as with any truncating
//! division (`-7 / 2` gives `q = -3, r = -1`).
//!
//! The engine only reaches this helper with a zero divisor; the general
//! branch is part of the contract all the same.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::division::divide_with_remainder;
//!
//! let safe = divide_with_remainder(5.0, 0.0);
//! assert_eq!((safe.quotient, safe.remainder), (0.0, 5.0));
//! assert!(safe.zero_divisor);
//!
//! let normal = divide_with_remainder(17.0, 5.0);
//! assert_eq!((normal.quotient, normal.remainder), (3.0, 2.0));
//! ```

use serde::{Deserialize, Serialize};

use super::number_text::format_number;

/// Quotient/remainder pair produced by [`divide_with_remainder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuotientRemainder {
    /// Truncated quotient (0 when the divisor was 0)
    pub quotient: f64,

    /// What is left of the dividend after `quotient` full divisions
    pub remainder: f64,

    /// True when the zero-divisor rule was applied
    pub zero_divisor: bool,
}

impl QuotientRemainder {
    /// Display text in the `q=<q>, r=<r>` form.
    pub fn display_text(&self) -> String {
        format!("q={}, r={}", format_number(self.quotient), format_number(self.remainder))
    }
}

/// Divide `dividend` by `divisor`, returning a truncated quotient and remainder.
///
/// A zero divisor (including `-0.0`) yields `(0, dividend)` instead of an error.
pub fn divide_with_remainder(dividend: f64, divisor: f64) -> QuotientRemainder {
    if divisor == 0.0 {
        return QuotientRemainder {
            quotient: 0.0,
            remainder: dividend,
            zero_divisor: true,
        };
    }

    let quotient = (dividend / divisor).trunc();
    let remainder = dividend - quotient * divisor;
    QuotientRemainder {
        quotient,
        remainder,
        zero_divisor: false,
    }
}
