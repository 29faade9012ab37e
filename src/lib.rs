//! A timespan measured in whole milliseconds, with constructors and chainable arithmetic
//! across milliseconds, seconds, minutes, hours, days and (Julian) years.
//!
//! ```
//! use timespan::{Components, Timespan};
//!
//! let mut timespan = Timespan::from_components(Components {
//!     days: 1,
//!     hours: 3,
//!     ..Default::default()
//! });
//! timespan.add_minutes(30).remove_hours(1);
//! assert_eq!(timespan.total_hours(), 26.5);
//! ```

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{AddAssign, SubAssign};

pub use crate::error::Error;
pub use crate::factory::IntoInstant;
pub use crate::unit::{
    Unit, MILLISECONDS_PER_DAY, MILLISECONDS_PER_HOUR, MILLISECONDS_PER_MINUTE,
    MILLISECONDS_PER_SECOND, MILLISECONDS_PER_YEAR,
};

/// Interop with the duration types of `std` and `chrono`.
mod conversions;
mod error;
mod factory;
mod unit;


/// The parts a [`Timespan`] is built from.
/// Every field defaults to zero, and fields may be negative.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Components {
    pub milliseconds: i64,
    pub seconds: i64,
    pub minutes: i64,
    pub hours: i64,
    pub days: i64,
    pub years: i64,
}

impl Components {
    fn total_milliseconds(&self) -> i128 {
        Unit::Millisecond.contribution(self.milliseconds)
            + Unit::Second.contribution(self.seconds)
            + Unit::Minute.contribution(self.minutes)
            + Unit::Hour.contribution(self.hours)
            + Unit::Day.contribution(self.days)
            + Unit::Year.contribution(self.years)
    }
}

/// A nonnegative length of time in whole milliseconds.
///
/// Constructors take the absolute value of their input.
/// Unit amounts are whole numbers, so a fractional amount has to be given in a smaller unit:
/// one and a half hours is `add_minutes(90)`, not `add_hours(1.5)`.
/// Mutators never go below zero: removing more than there is leaves an empty timespan.
///
/// Equality, ordering and hashing only consider the current length,
/// not the length the timespan was created with.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timespan {
    milliseconds: u64,
    original_milliseconds: u64,
}

impl Timespan {
    /// Creates a timespan of `|milliseconds|` milliseconds.
    pub fn new(milliseconds: i64) -> Self {
        Self::from_unsigned(milliseconds.unsigned_abs())
    }

    /// Creates a timespan from the absolute value of the sum of all components.
    ///
    /// A component may be negative, in which case it reduces the sum,
    /// possibly below zero before the absolute value is taken.
    pub fn from_components(components: Components) -> Self {
        Self::from_unsigned(saturate(components.total_milliseconds().unsigned_abs()))
    }

    /// Creates a timespan of `|amount|` times `unit`.
    /// Fractions of `unit` need a smaller unit, e.g. `from_unit(Unit::Minute, 90)` for 1.5 hours.
    pub fn from_unit(unit: Unit, amount: i64) -> Self {
        Self::from_unsigned(saturate(unit.contribution(amount).unsigned_abs()))
    }

    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self::from_unit(Unit::Millisecond, milliseconds)
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self::from_unit(Unit::Second, seconds)
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self::from_unit(Unit::Minute, minutes)
    }

    pub fn from_hours(hours: i64) -> Self {
        Self::from_unit(Unit::Hour, hours)
    }

    pub fn from_days(days: i64) -> Self {
        Self::from_unit(Unit::Day, days)
    }

    pub fn from_years(years: i64) -> Self {
        Self::from_unit(Unit::Year, years)
    }

    pub(crate) const fn from_unsigned(milliseconds: u64) -> Self {
        Self {
            milliseconds,
            original_milliseconds: milliseconds,
        }
    }

    /// Adds the length of `other` to this timespan.
    pub fn add(&mut self, other: &Timespan) -> &mut Self {
        self.shift(i128::from(other.milliseconds))
    }

    /// Subtracts the length of `other` from this timespan, stopping at zero.
    pub fn subtract(&mut self, other: &Timespan) -> &mut Self {
        self.shift(-i128::from(other.milliseconds))
    }

    /// Adds `amount` of `unit`. A negative amount removes instead.
    /// Fractions of `unit` need a smaller unit.
    pub fn add_unit(&mut self, unit: Unit, amount: i64) -> &mut Self {
        self.shift(unit.contribution(amount))
    }

    /// Removes `amount` of `unit`, stopping at zero. A negative amount adds instead.
    /// Fractions of `unit` need a smaller unit.
    pub fn remove_unit(&mut self, unit: Unit, amount: i64) -> &mut Self {
        self.shift(-unit.contribution(amount))
    }

    pub fn add_milliseconds(&mut self, milliseconds: i64) -> &mut Self {
        self.add_unit(Unit::Millisecond, milliseconds)
    }

    pub fn add_seconds(&mut self, seconds: i64) -> &mut Self {
        self.add_unit(Unit::Second, seconds)
    }

    pub fn add_minutes(&mut self, minutes: i64) -> &mut Self {
        self.add_unit(Unit::Minute, minutes)
    }

    /// Whole hours only; add 1.5 hours as `add_minutes(90)`.
    pub fn add_hours(&mut self, hours: i64) -> &mut Self {
        self.add_unit(Unit::Hour, hours)
    }

    pub fn add_days(&mut self, days: i64) -> &mut Self {
        self.add_unit(Unit::Day, days)
    }

    pub fn add_years(&mut self, years: i64) -> &mut Self {
        self.add_unit(Unit::Year, years)
    }

    pub fn remove_milliseconds(&mut self, milliseconds: i64) -> &mut Self {
        self.remove_unit(Unit::Millisecond, milliseconds)
    }

    pub fn remove_seconds(&mut self, seconds: i64) -> &mut Self {
        self.remove_unit(Unit::Second, seconds)
    }

    pub fn remove_minutes(&mut self, minutes: i64) -> &mut Self {
        self.remove_unit(Unit::Minute, minutes)
    }

    pub fn remove_hours(&mut self, hours: i64) -> &mut Self {
        self.remove_unit(Unit::Hour, hours)
    }

    pub fn remove_days(&mut self, days: i64) -> &mut Self {
        self.remove_unit(Unit::Day, days)
    }

    pub fn remove_years(&mut self, years: i64) -> &mut Self {
        self.remove_unit(Unit::Year, years)
    }

    /// Restores the length this timespan was created with.
    pub fn reset(&mut self) -> &mut Self {
        self.milliseconds = self.original_milliseconds;
        self
    }

    pub fn total_milliseconds(&self) -> u64 {
        self.milliseconds
    }

    /// The length in `unit`, without rounding.
    pub fn total(&self, unit: Unit) -> f64 {
        self.milliseconds as f64 / unit.milliseconds() as f64
    }

    pub fn total_seconds(&self) -> f64 {
        self.total(Unit::Second)
    }

    pub fn total_minutes(&self) -> f64 {
        self.total(Unit::Minute)
    }

    pub fn total_hours(&self) -> f64 {
        self.total(Unit::Hour)
    }

    pub fn total_days(&self) -> f64 {
        self.total(Unit::Day)
    }

    pub fn total_years(&self) -> f64 {
        self.total(Unit::Year)
    }

    /// The length this timespan was created with.
    pub fn original_milliseconds(&self) -> u64 {
        self.original_milliseconds
    }

    pub fn is_zero(&self) -> bool {
        self.milliseconds == 0
    }

    fn shift(&mut self, delta: i128) -> &mut Self {
        let shifted = i128::from(self.milliseconds) + delta;
        self.milliseconds = if shifted < 0 {
            debug!(
                "Clamping timespan at zero, {} ms removed from {} ms",
                -delta, self.milliseconds
            );
            0
        } else {
            saturate(shifted.unsigned_abs())
        };
        self
    }
}

/// Narrows a millisecond count to `u64`, saturating on overflow.
pub(crate) fn saturate(milliseconds: u128) -> u64 {
    u64::try_from(milliseconds).unwrap_or_else(|_| {
        warn!(
            "Timespan of {} ms exceeds the representable range, saturating",
            milliseconds
        );
        u64::MAX
    })
}

impl PartialEq for Timespan {
    fn eq(&self, other: &Self) -> bool {
        self.milliseconds == other.milliseconds
    }
}

impl Eq for Timespan {}

impl PartialOrd for Timespan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timespan {
    fn cmp(&self, other: &Self) -> Ordering {
        self.milliseconds.cmp(&other.milliseconds)
    }
}

impl Hash for Timespan {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.milliseconds.hash(state);
    }
}

impl AddAssign for Timespan {
    fn add_assign(&mut self, rhs: Self) {
        self.add(&rhs);
    }
}

impl SubAssign for Timespan {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract(&rhs);
    }
}
