use thiserror::Error;

/// The error type of this crate.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// An input could not be interpreted, e.g. a string that is not an RFC 3339 instant,
    /// or a foreign duration that does not fit into a [`Timespan`](crate::Timespan).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
