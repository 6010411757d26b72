//! Amount type for monetary values with exactly two decimal places.
//!
//! This module provides the `Amount` type which wraps `Decimal`, rounds every value it is given
//! to cents, and always renders with two fractional digits.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The number of fractional digits an `Amount` carries.
const SCALE: u32 = 2;

/// Represents a monetary amount.
///
/// Values are rounded half away from zero to two decimal places on construction, so the text
/// form always has exactly two fractional digits. Negative and zero amounts are allowed. The
/// magnitude is limited to [`Amount::LIMIT`], the largest value `Decimal` can hold with two
/// fractional digits.
///
/// # Examples
///
/// ```
/// # use budget_tracker::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("3.5").unwrap();
/// assert_eq!(amount.to_string(), "3.50");
///
/// let amount = Amount::from_str("12.345").unwrap();
/// assert_eq!(amount.to_string(), "12.35");
///
/// let amount = Amount::from_str("1e3").unwrap();
/// assert_eq!(amount.to_string(), "1000.00");
///
/// assert!(Amount::from_str("1e29").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    pub const ZERO: Amount = Amount {
        value: Decimal::ZERO,
    };

    /// The largest magnitude an `Amount` can have: 792281625142643375935439503.35.
    pub const LIMIT: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, SCALE);

    /// Creates a new Amount, rounding `value` to two decimal places.
    ///
    /// Returns `None` when `value` is too large to be held with two fractional digits.
    pub fn new(value: Decimal) -> Option<Self> {
        let mut value =
            value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        // `rescale` leaves the scale lower when the mantissa would overflow.
        value.rescale(SCALE);
        if value.scale() != SCALE {
            return None;
        }
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Some(Self { value })
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.value.is_sign_negative()
    }

    /// Adds two amounts, returning `None` if the result exceeds [`Amount::LIMIT`].
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.value.checked_add(rhs.value).and_then(Amount::new)
    }

    /// Sums `amounts`, returning `None` as soon as a running total exceeds [`Amount::LIMIT`].
    pub fn checked_sum<I>(amounts: I) -> Option<Amount>
    where
        I: IntoIterator<Item = Amount>,
    {
        amounts.into_iter().try_fold(Amount::ZERO, Amount::checked_add)
    }
}

/// An error that can occur when parsing strings into `Amount` values.
#[derive(Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The text is not a number at all.
    NotANumber(String),
    /// The text is a number, but its magnitude exceeds [`Amount::LIMIT`].
    OutOfRange(String),
}

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::NotANumber(s) => write!(f, "NotANumber({s:?})"),
            AmountError::OutOfRange(s) => write!(f, "OutOfRange({s:?})"),
        }
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::NotANumber(s) => write!(f, "'{s}' is not a number"),
            AmountError::OutOfRange(s) => write!(f, "'{s}' is out of range"),
        }
    }
}

impl std::error::Error for AmountError {}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let not_a_number = || AmountError::NotANumber(s.to_string());
        let out_of_range = || AmountError::OutOfRange(s.to_string());
        let value = match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
            Ok(value) => value,
            // Numbers too large for `Decimal` still parse as floats.
            Err(_) => match trimmed.parse::<f64>() {
                Ok(float) if float.is_nan() => return Err(not_a_number()),
                Ok(float) => Decimal::from_f64(float).ok_or_else(out_of_range)?,
                Err(_) => return Err(not_a_number()),
            },
        };
        Amount::new(value).ok_or_else(out_of_range)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut value = self.value;
        value.rescale(SCALE);
        // `pad` so that width and alignment flags work in table layouts.
        f.pad(&value.to_string())
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}
