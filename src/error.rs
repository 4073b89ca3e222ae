//! Driver result taxonomy
//!
//! Every fallible operation in this crate returns [`Error`]. Transports
//! implementing [`Bus`](crate::Bus) report their own failures with the same
//! type, and the driver passes them through untouched.

use core::fmt;

/// Errors returned by the driver and by bus transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Malformed configuration, unsupported modem, double initialization
    /// or an invalid bus frame.
    InvalidArgument,
    /// The transport or radio is in a state that prevents the request.
    Busy,
    /// The transport gave up waiting.
    Timeout,
    /// The transport could not allocate what it needed.
    OutOfMemory,
    /// The underlying HAL reported a failure.
    Hal,
    /// Operation attempted on a handle that has not been initialized.
    NotInitialized,
    /// Unclassified failure.
    Unknown,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidArgument => "invalid argument",
            Error::Busy => "busy",
            Error::Timeout => "timeout",
            Error::OutOfMemory => "out of memory",
            Error::Hal => "HAL error",
            Error::NotInitialized => "not initialized",
            Error::Unknown => "unknown error",
        };
        f.write_str(msg)
    }
}
