//! Monetary amounts in the smallest currency unit.

use core::ops::{Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Amount of money in minor units (cents).
///
/// Integer cents keep totals exact: `3.30 + 5.30` is `8.60`, and a customer
/// with `100.00` who pays it is left with exactly `91.40`.
///
/// There is no `+` operator: sums go through [`Money::checked_add`] or
/// [`Money::saturating_add`] so totals cannot silently wrap.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl ValueObject for Money {}

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Build an amount from whole units and cents (`from_major_minor(8, 60)` is `8.60`).
    ///
    /// A negative `major` yields a negative amount; `minor` must be below 100.
    pub fn from_major_minor(major: i64, minor: u32) -> DomainResult<Self> {
        if minor >= 100 {
            return Err(DomainError::validation("minor units must be below 100"));
        }
        let minor = i64::from(minor);
        let cents = major
            .checked_mul(100)
            .and_then(|c| if major < 0 { c.checked_sub(minor) } else { c.checked_add(minor) })
            .ok_or_else(|| DomainError::validation("amount out of range"))?;
        Ok(Self(cents))
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `None` if the sum leaves the `i64` range.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Clamps at the `i64` bounds.
    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    /// Sum every amount, or `None` on overflow.
    pub fn checked_sum(amounts: impl IntoIterator<Item = Money>) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), Money::checked_add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

// Callers debit only amounts already checked against the balance.
impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}
