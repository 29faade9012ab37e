#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const MILLISECONDS_PER_SECOND: u64 = 1_000;
pub const MILLISECONDS_PER_MINUTE: u64 = 60 * MILLISECONDS_PER_SECOND;
pub const MILLISECONDS_PER_HOUR: u64 = 60 * MILLISECONDS_PER_MINUTE;
pub const MILLISECONDS_PER_DAY: u64 = 24 * MILLISECONDS_PER_HOUR;
/// A Julian year of 365.25 days.
pub const MILLISECONDS_PER_YEAR: u64 = 36_525 * MILLISECONDS_PER_DAY / 100;

/// A unit a [`Timespan`](crate::Timespan) can be built from or measured in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Year,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Year,
    ];

    /// The number of milliseconds in one of this unit.
    pub const fn milliseconds(self) -> u64 {
        match self {
            Unit::Millisecond => 1,
            Unit::Second => MILLISECONDS_PER_SECOND,
            Unit::Minute => MILLISECONDS_PER_MINUTE,
            Unit::Hour => MILLISECONDS_PER_HOUR,
            Unit::Day => MILLISECONDS_PER_DAY,
            Unit::Year => MILLISECONDS_PER_YEAR,
        }
    }

    /// The signed millisecond contribution of `amount` of this unit.
    pub(crate) fn contribution(self, amount: i64) -> i128 {
        i128::from(amount) * i128::from(self.milliseconds())
    }
}
