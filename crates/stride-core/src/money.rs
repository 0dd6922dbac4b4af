//! # Money Module
//!
//! Monetary values for the storefront, stored as integer cents.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    19999 cents = 199,99 €                                               │
//! │    Sums, snapshots and totals are exact by construction                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog prices, order line snapshots and order totals all flow through
//! [`Money`]. Only display formatting converts to a decimal string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative intermediate values (refund math)
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Serde transparent**: serializes as a bare integer cent amount
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use stride_core::Money;
    ///
    /// let price = Money::from_cents(19999); // 199,99 €
    /// assert_eq!(price.cents(), 19999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-euro portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cent portion (always 0-99).
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

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use stride_core::Money;
    ///
    /// let unit_price = Money::from_cents(9999);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 19998);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage discount.
    ///
    /// An out-of-range percentage (below 0 or above 100) or NaN is a no-op,
    /// not an error: the undiscounted total is returned unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use stride_core::Money;
    ///
    /// let total = Money::from_cents(10_000);
    /// assert_eq!(total.apply_discount(10.0).cents(), 9_000);
    /// assert_eq!(total.apply_discount(150.0), total);
    /// assert_eq!(total.apply_discount(-5.0), total);
    /// ```
    pub fn apply_discount(&self, percent: f64) -> Money {
        if percent.is_nan() || !(0.0..=100.0).contains(&percent) {
            return *self;
        }
        let discounted = self.0 as f64 * (1.0 - percent / 100.0);
        Money(discounted.round() as i64)
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Shipping cost for an order total.
///
/// Free at or above `free_threshold`, otherwise the flat `shipping_cost`.
///
/// ## Example
/// ```rust
/// use stride_core::money::calculate_shipping;
/// use stride_core::{Money, FREE_SHIPPING_THRESHOLD, STANDARD_SHIPPING_COST};
///
/// let below = Money::from_cents(5_000);
/// let above = Money::from_cents(15_000);
/// assert_eq!(
///     calculate_shipping(below, FREE_SHIPPING_THRESHOLD, STANDARD_SHIPPING_COST),
///     STANDARD_SHIPPING_COST
/// );
/// assert_eq!(
///     calculate_shipping(above, FREE_SHIPPING_THRESHOLD, STANDARD_SHIPPING_COST),
///     Money::zero()
/// );
/// ```
pub fn calculate_shipping(order_total: Money, free_threshold: Money, shipping_cost: Money) -> Money {
    if order_total >= free_threshold {
        Money::zero()
    } else {
        shipping_cost
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a price for display: decimal comma, two digits, trailing symbol.
///
/// This mirrors the shop's sl-SI locale formatting ("199,99 €"). Thousands
/// grouping is intentionally omitted; this is a display string, not an
/// interchange format.
pub fn format_price(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}{},{:02} {}",
        sign,
        amount.euros().abs(),
        amount.cents_part(),
        symbol
    )
}

/// Display shows the shop's default EUR formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_price(*self, "€"))
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
