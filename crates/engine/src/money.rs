//! Cash amounts.
//!
//! Everything the ledger adds up is a [`Money`]: a whole number of paise
//! (hundredths of the unit), so sums never drift the way floats do. The
//! engine does not know which currency it is counting; symbols and digit
//! grouping belong to the front-end.

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Neg},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Signed amount in hundredths.
///
/// Entries themselves are always positive; the sign only shows up once an
/// `Out` entry is folded into a balance.
///
/// ```rust
/// use engine::Money;
///
/// let rent: Money = "1250,50".parse().unwrap();
/// assert_eq!(rent.minor(), 125_050);
/// assert_eq!((-rent).to_string(), "-1250.50");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Hundredths, as stored in the journal.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// `None` when the sum no longer fits; the ledger refuses such entries.
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

/// Plain `1234.50` / `-0.05`, no symbol or grouping.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let hundredths = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", hundredths / 100, hundredths % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Reads the amount field of an entry draft.
    ///
    /// What a user may type:
    /// - digits with an optional `.` or `,` and at most two digits after it
    ///   (`12`, `12.5`, `12,50`, `.5`, `12.`)
    /// - an optional leading `+` or `-`; a negative amount parses, the draft
    ///   then rejects it for not being positive
    /// - surrounding blanks
    ///
    /// Thousands separators, exponents and a third decimal are refused, as is
    /// anything that does not fit in hundredths.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = |why: &str| EngineError::InvalidAmount(format!("{why}: {s:?}"));

        let text = s.trim();
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, text[1..].trim_start()),
            Some(b'+') => (false, text[1..].trim_start()),
            _ => (false, text),
        };
        if unsigned.is_empty() {
            return Err(reject("empty amount"));
        }

        let unsigned = unsigned.replace(',', ".");
        let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(cents) || (whole.is_empty() && cents.is_empty()) {
            return Err(reject("not a number"));
        }
        if cents.len() > 2 {
            return Err(reject("more than two decimals"));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| reject("amount too large"))?
        };
        // "5" after the separator means fifty hundredths.
        let cents: i64 = format!("{cents:0<2}")
            .parse()
            .map_err(|_| reject("not a number"))?;

        let hundredths = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| reject("amount too large"))?;
        Ok(Money(if negative { -hundredths } else { hundredths }))
    }
}
