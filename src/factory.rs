use crate::{saturate, Error, Timespan};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use log::debug;
use std::time::{SystemTime, UNIX_EPOCH};

/// A value that can be interpreted as a point in time.
///
/// Implemented for chrono's date-times, [`SystemTime`], Unix timestamps in milliseconds (`i64`)
/// and RFC 3339 strings. Conversion fails with [`Error::InvalidArgument`]
/// if the value does not denote an instant chrono can represent.
pub trait IntoInstant {
    fn into_instant(self) -> Result<DateTime<Utc>, Error>;
}

impl<Tz: TimeZone> IntoInstant for DateTime<Tz> {
    fn into_instant(self) -> Result<DateTime<Utc>, Error> {
        Ok(self.with_timezone(&Utc))
    }
}

/// Naive date-times are taken to be in UTC.
impl IntoInstant for NaiveDateTime {
    fn into_instant(self) -> Result<DateTime<Utc>, Error> {
        Ok(Utc.from_utc_datetime(&self))
    }
}

/// Milliseconds since the Unix epoch.
impl IntoInstant for i64 {
    fn into_instant(self) -> Result<DateTime<Utc>, Error> {
        DateTime::<Utc>::from_timestamp_millis(self).ok_or_else(|| {
            Error::InvalidArgument(format!("timestamp {self} ms is out of range"))
        })
    }
}

impl IntoInstant for SystemTime {
    fn into_instant(self) -> Result<DateTime<Utc>, Error> {
        let out_of_range = || Error::InvalidArgument(format!("{self:?} is out of range"));
        let milliseconds = match self.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).map_err(|_| out_of_range())?,
            Err(before) => {
                // Round away from the epoch so pre-epoch times floor like `timestamp_millis`.
                let before = before.duration();
                let partial = u128::from(before.subsec_nanos() % 1_000_000 != 0);
                i64::try_from(before.as_millis() + partial)
                    .map(|milliseconds| -milliseconds)
                    .map_err(|_| out_of_range())?
            }
        };
        milliseconds.into_instant().map_err(|_| out_of_range())
    }
}

/// RFC 3339, e.g. `2000-01-01T01:00:00Z`.
impl IntoInstant for &str {
    fn into_instant(self) -> Result<DateTime<Utc>, Error> {
        DateTime::parse_from_rfc3339(self)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|error| {
                Error::InvalidArgument(format!("{self:?} is not a valid instant: {error}"))
            })
    }
}

impl IntoInstant for String {
    fn into_instant(self) -> Result<DateTime<Utc>, Error> {
        self.as_str().into_instant()
    }
}

impl IntoInstant for &String {
    fn into_instant(self) -> Result<DateTime<Utc>, Error> {
        self.as_str().into_instant()
    }
}

impl Timespan {
    /// The time since the Unix epoch as of now.
    pub fn from_now() -> Self {
        Self::from_epoch(Utc::now())
    }

    /// The time between the Unix epoch and `instant`.
    /// Instants before the epoch give the distance to the epoch.
    pub fn from_instant(instant: impl IntoInstant) -> Result<Self, Error> {
        Ok(Self::from_epoch(instant.into_instant()?))
    }

    /// The time between `instant` and now, in either direction.
    pub fn from_instant_difference_from_now(instant: impl IntoInstant) -> Result<Self, Error> {
        let instant = instant.into_instant()?;
        Ok(Self::between(instant, Utc::now()))
    }

    /// The time between `a` and `b`, regardless of which one comes first.
    pub fn from_instants_difference(
        a: impl IntoInstant,
        b: impl IntoInstant,
    ) -> Result<Self, Error> {
        let a = a.into_instant()?;
        let b = b.into_instant()?;
        Ok(Self::between(a, b))
    }

    fn from_epoch(instant: DateTime<Utc>) -> Self {
        Self::from_unsigned(instant.timestamp_millis().unsigned_abs())
    }

    fn between(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        let difference =
            (i128::from(a.timestamp_millis()) - i128::from(b.timestamp_millis())).unsigned_abs();
        debug!("Timespan between {a} and {b} is {difference} ms");
        Self::from_unsigned(saturate(difference))
    }
}
