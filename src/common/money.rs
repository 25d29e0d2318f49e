use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::fmt;
use std::iter::Sum;
use std::ops::Neg;
use std::str::FromStr;

/// Ten-thousandths per currency unit.
const SCALE: i64 = 10_000;

/// A monetary value stored as a signed count of ten-thousandths.
///
/// Balances, cash inventories and transaction amounts all use `Money` so that
/// sums over a transaction log never pick up floating-point drift. Values are
/// parsed from decimal strings and always printed with 4 decimal places.
///
/// Arithmetic is explicit: guarded mutators use [`Money::checked_add`] and
/// [`Money::checked_sub`] so an overflowing balance is rejected before
/// anything changes, while aggregates such as [`Sum`] clamp at the `i64`
/// range.
///
/// # Examples
/// ```
/// use banking_demo::common::money::Money;
///
/// let amount = Money::from_units(12);
/// assert_eq!(amount.as_i64(), 120_000);
/// assert_eq!(amount.to_string_4dp(), "12.0000");
///
/// let parsed: Money = "0.25".parse().unwrap();
/// assert_eq!(parsed.to_string(), "0.2500");
/// assert_eq!(amount.checked_add(parsed), Some(Money::new(122_500)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const MAX: Money = Money(i64::MAX);
    pub const MIN: Money = Money(i64::MIN);

    /// Wraps a raw value already expressed in ten-thousandths.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Whole currency units, e.g. `from_units(1000)` is 1000.0000. Clamps at
    /// [`Money::MAX`] / [`Money::MIN`].
    pub const fn from_units(units: i64) -> Self {
        Money(units.saturating_mul(SCALE))
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// `None` when the result leaves the representable range.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// `None` when the result leaves the representable range.
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    pub fn to_string_4dp(&self) -> String {
        format!("{:.4}", BigDecimal::new(self.0.into(), 4))
    }
}

impl FromStr for Money {
    type Err = ParseBigDecimalError;

    /// Accepts any decimal literal, rounding half away from zero to 4 dp.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let ten_thousandths = (trimmed.parse::<BigDecimal>()? * BigDecimal::from(SCALE)).round(0);
        ten_thousandths
            .to_i64()
            .map(Money)
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_string_4dp())
    }
}

/// Negation clamps `Money::MIN` to `Money::MAX`.
impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
