//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A sale nets 100.00 - 5.00 - 3.00 - 2.00 - 5.00 = 85.00                │
//! │  In floating point the same chain drifts by fractions of a cent,       │
//! │  and every report summing hundreds of sales inherits the drift.        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10000 - 500 - 300 - 200 - 500 = 8500 cents, exactly                 │
//! │    Rounding happens once, where a percentage is applied                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fluxo_core::money::Money;
//!
//! // Create from cents
//! let price = Money::from_cents(1099); // 10.99
//!
//! // Or parse what the operator typed
//! let typed = Money::parse("10,99").unwrap();
//! assert_eq!(price, typed);
//!
//! // Malformed input becomes zero where the form allows it
//! assert_eq!(Money::parse_or_zero("abc"), Money::zero());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: net revenue and profit are allowed to go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Saturating arithmetic**: totals clamp at `i64::MIN`/`i64::MAX` instead
///   of overflowing, so oversized stock cannot take the reports down
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Sale.sale_price ──► invoice cost ──► net revenue ──► profit           │
/// │                                            │                            │
/// │                                            ├──► income Transaction      │
/// │                                            └──► Account.balance         │
/// │                                                                         │
/// │  Product.cost × quantity ──► stock value ──► working capital           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use fluxo_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use fluxo_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(85).cents(), 8500);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units.saturating_mul(100))
    }

    /// Parses a decimal amount typed by the operator.
    ///
    /// Accepts an optional sign, digits, and either `.` or `,` as the
    /// decimal separator. Digits past the second decimal are rounded half
    /// away from zero. Returns `None` for blank or malformed input.
    ///
    /// ## Example
    /// ```rust
    /// use fluxo_core::money::Money;
    ///
    /// assert_eq!(Money::parse("12.5"), Some(Money::from_cents(1250)));
    /// assert_eq!(Money::parse("12,50"), Some(Money::from_cents(1250)));
    /// assert_eq!(Money::parse("0.005"), Some(Money::from_cents(1)));
    /// assert_eq!(Money::parse(""), None);
    /// assert_eq!(Money::parse("12a"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        parse_hundredths(input).map(Money)
    }

    /// Parses an amount, coercing blank or malformed input to zero.
    #[inline]
    pub fn parse_or_zero(input: &str) -> Self {
        Money::parse(input).unwrap_or_default()
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage rate to this amount.
    ///
    /// Rounds half away from zero, so a negative amount rounds the same
    /// way as its positive mirror.
    ///
    /// ## Example
    /// ```rust
    /// use fluxo_core::money::Money;
    /// use fluxo_core::types::Rate;
    ///
    /// let price = Money::from_units(100);
    /// assert_eq!(price.percentage(Rate::from_bps(500)), Money::from_units(5));
    ///
    /// // 10.01 at 5% = 0.5005 → 0.50
    /// assert_eq!(Money::from_cents(1001).percentage(Rate::from_bps(500)).cents(), 50);
    /// ```
    pub fn percentage(&self, rate: Rate) -> Money {
        // i128 so large amounts cannot overflow the intermediate product
        let scaled = self.0 as i128 * rate.bps() as i128;
        Money::from_cents(clamp_cents(div_round(scaled, 10_000)))
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use fluxo_core::money::Money;
    ///
    /// let unit_cost = Money::from_units(10);
    /// assert_eq!(unit_cost.multiply_quantity(18), Money::from_units(180));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Divides evenly across `count` items, rounding half away from zero.
    ///
    /// Returns zero when `count` is zero.
    ///
    /// ## Example
    /// ```rust
    /// use fluxo_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1000).per_item(3).cents(), 333);
    /// assert_eq!(Money::from_cents(1000).per_item(0), Money::zero());
    /// ```
    pub fn per_item(&self, count: usize) -> Money {
        if count == 0 {
            return Money::zero();
        }
        Money::from_cents(clamp_cents(div_round(self.0 as i128, count as i128)))
    }

    /// Returns this amount as a percentage of `whole` (display only).
    ///
    /// Returns `0.0` when `whole` is zero.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            return 0.0;
        }
        self.0 as f64 / whole.0 as f64 * 100.0
    }
}

// =============================================================================
// Parsing Helpers
// =============================================================================

/// Integer division rounding half away from zero.
fn div_round(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.abs() * 2 >= denominator.abs() {
        if (numerator < 0) != (denominator < 0) {
            quotient - 1
        } else {
            quotient + 1
        }
    } else {
        quotient
    }
}

/// Narrows an i128 intermediate back to cents, clamping at the i64 bounds.
fn clamp_cents(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Parses a decimal string into hundredths ("12.5" → 1250).
///
/// Shared by `Money` (cents) and `Rate` (basis points are hundredths of a
/// percent).
pub(crate) fn parse_hundredths(input: &str) -> Option<i64> {
    let input = input.trim();
    let (negative, digits) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        Some(_) => (false, input),
        None => return None,
    };

    let (whole, fraction) = match digits.find(|c| c == '.' || c == ',') {
        Some(pos) => (&digits[..pos], &digits[pos + 1..]),
        None => (digits, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let mut value: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse::<i64>().ok()?.checked_mul(100)?
    };

    let mut frac_digits = fraction.bytes().map(|b| (b - b'0') as i64);
    let tenths = frac_digits.next().unwrap_or(0);
    let hundredths = frac_digits.next().unwrap_or(0);
    value = value.checked_add(tenths * 10 + hundredths)?;
    if frac_digits.next().unwrap_or(0) >= 5 {
        value = value.checked_add(1)?;
    }

    Some(if negative { -value } else { value })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain debugging format. The presentation layer owns localized display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(self.0.saturating_neg())
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.units(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_parse_accepts_both_separators() {
        assert_eq!(Money::parse("85"), Some(Money::from_units(85)));
        assert_eq!(Money::parse("85.5"), Some(Money::from_cents(8550)));
        assert_eq!(Money::parse("85,55"), Some(Money::from_cents(8555)));
        assert_eq!(Money::parse(" .5 "), Some(Money::from_cents(50)));
        assert_eq!(Money::parse("-3.20"), Some(Money::from_cents(-320)));
        assert_eq!(Money::parse("+3"), Some(Money::from_cents(300)));
    }

    #[test]
    fn test_parse_rounds_third_decimal() {
        assert_eq!(Money::parse("1.234"), Some(Money::from_cents(123)));
        assert_eq!(Money::parse("1.235"), Some(Money::from_cents(124)));
        assert_eq!(Money::parse("-1.235"), Some(Money::from_cents(-124)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Money::parse(""), None);
        assert_eq!(Money::parse("   "), None);
        assert_eq!(Money::parse("-"), None);
        assert_eq!(Money::parse("."), None);
        assert_eq!(Money::parse("1.2.3"), None);
        assert_eq!(Money::parse("ten"), None);
        assert_eq!(Money::parse("99999999999999999999"), None);
        assert_eq!(Money::parse_or_zero("ten"), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-0.05");
        assert_eq!(format!("{}", Money::zero()), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX - 10);

        assert_eq!((huge + Money::from_units(1)).cents(), i64::MAX);
        assert_eq!((-huge - Money::from_units(1)).cents(), i64::MIN);
        assert_eq!(huge.multiply_quantity(1_000_000).cents(), i64::MAX);
        assert_eq!((huge * -2).cents(), i64::MIN);
        assert_eq!(Money::from_units(i64::MAX).cents(), i64::MAX);

        let mut total = huge;
        total += huge;
        assert_eq!(total.cents(), i64::MAX);

        let total: Money = [huge, huge, Money::from_cents(-1)].iter().sum();
        assert_eq!(total.cents(), i64::MAX - 1);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_units(1), Money::from_units(2), Money::from_cents(-50)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 250);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percentage() {
        let price = Money::from_units(100);
        assert_eq!(price.percentage(Rate::from_bps(500)).cents(), 500);
        assert_eq!(price.percentage(Rate::zero()).cents(), 0);

        // 0.10 at 5% = 0.005 → 0.01
        assert_eq!(Money::from_cents(10).percentage(Rate::from_bps(500)).cents(), 1);
        assert_eq!(Money::from_cents(-10).percentage(Rate::from_bps(500)).cents(), -1);
    }

    #[test]
    fn test_per_item() {
        assert_eq!(Money::from_units(170).per_item(2).cents(), 8500);
        assert_eq!(Money::from_cents(1000).per_item(3).cents(), 333);
        assert_eq!(Money::from_cents(2000).per_item(3).cents(), 667);
        assert_eq!(Money::from_cents(-2000).per_item(3).cents(), -667);
        assert!(Money::from_units(5).per_item(0).is_zero());
    }

    #[test]
    fn test_percent_of() {
        let profit = Money::from_units(65);
        let revenue = Money::from_units(85);
        assert!((profit.percent_of(revenue) - 76.470588).abs() < 0.0001);
        assert_eq!(profit.percent_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert!(!negative.is_positive());
    }
}
