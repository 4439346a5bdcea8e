//! # Errors
//!
//! This module defines the error types used by the SDK. The taxonomy is
//! deliberately small: every failure a caller can act on falls into one of
//! four codes, and everything else travels as context on top of one of them.

use std::fmt::Display;

use thiserror::Error;

/// Simplify creation of errors with tracing.
///
/// # Example
/// ```
/// use device_attest::error::Err;
/// use device_attest::{tracerr, Result};
///
/// fn with_msg() -> Result<()> {
///     tracerr!(Err::InvalidInput, "message: {}", "some message")
/// }
///
/// fn no_msg() -> Result<()> {
///     tracerr!(Err::InvalidInput)
/// }
/// # assert!(with_msg().is_err());
/// # assert!(no_msg().is_err());
/// ```
#[macro_export]
macro_rules! tracerr {
    // with context
    ($code:expr, $($msg:tt)*) => {
        {
        use $crate::error::Context as _;
        tracing::error!($($msg)*);
        return Err($code).context(format!($($msg)*));
        }
    };
    // no context
    ($code:expr) => {
        {
        tracing::error!("{}", $code);
        return Err($code.into());
        }
    }
}

/// Public error type for the SDK.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct Error(#[from] anyhow::Error);

impl Error {
    /// Returns true if `E` is the type held by this error object.
    #[must_use]
    pub fn is(&self, err: Err) -> bool {
        self.0.downcast_ref::<Err>().map_or(false, |e| e == &err)
    }
}

/// Typed errors for the SDK.
#[derive(Clone, Copy, Error, Debug, PartialEq, Eq)]
pub enum Err {
    /// A required argument is absent or malformed: an empty payload, a key of
    /// the wrong length, a missing URL.
    #[error("invalid_input")]
    InvalidInput,

    /// A caller-supplied destination buffer cannot hold the full output. The
    /// capacity check runs before anything is written, so the destination is
    /// untouched.
    #[error("buffer_too_small")]
    BufferTooSmall,

    /// Opaque failure from the cryptographic primitives: curve setup, key
    /// import, hashing or signing. Not recoverable within the call; a fresh
    /// call with fresh randomness is the only retry path.
    #[error("crypto_error")]
    CryptoError,

    /// Network or HTTP failure surfaced unchanged from the transport. The
    /// only category a caller may reasonably retry.
    #[error("transport_error")]
    TransportError,
}

/// Context is used to decorate errors with useful context information.
pub trait Context<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Adds context to the error.
    ///
    /// # Errors
    ///
    /// * Original error with context appended.
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: Display + Send + Sync + 'static;
}

impl<T, E> Context<T, E> for core::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: Display + Send + Sync + 'static,
    {
        match self {
            Ok(ok) => Ok(ok),
            Err(e) => Err(Error(anyhow::Error::from(e).context(context))),
        }
    }
}

impl From<Err> for Error {
    fn from(error: Err) -> Self {
        Error(error.into())
    }
}
