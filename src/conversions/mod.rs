use crate::{Error, Timespan};
use chrono::TimeDelta;
use std::time::Duration;

/// Negative deltas give their magnitude. Sub-millisecond parts are truncated.
impl From<TimeDelta> for Timespan {
    fn from(delta: TimeDelta) -> Self {
        Self::from_unsigned(delta.num_milliseconds().unsigned_abs())
    }
}

impl TryFrom<Timespan> for TimeDelta {
    type Error = Error;

    fn try_from(timespan: Timespan) -> Result<Self, Self::Error> {
        i64::try_from(timespan.total_milliseconds())
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "{} ms do not fit into a chrono::TimeDelta",
                    timespan.total_milliseconds()
                ))
            })
    }
}

/// Sub-millisecond parts are truncated.
impl TryFrom<Duration> for Timespan {
    type Error = Error;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        u64::try_from(duration.as_millis())
            .map(Self::from_unsigned)
            .map_err(|_| {
                Error::InvalidArgument(format!("{duration:?} does not fit into a Timespan"))
            })
    }
}

impl From<Timespan> for Duration {
    fn from(timespan: Timespan) -> Self {
        Self::from_millis(timespan.total_milliseconds())
    }
}
