//! # Device Attest
//!
//! Minimal SDK for constrained devices to submit signed sensor data to an
//! attestor service, without a prior registration step.
//!
//! - `did:key` derivation (secp256k1 + multicodec + base58btc)
//! - JWS creation (ES256K, low-s normalized)
//! - HTTP POST of the signed submission
//!
//! Every call is self-contained: cryptographic state is built and dropped
//! within the call, nothing is cached, and no state is shared between
//! concurrent calls, so the SDK is safe to use from multiple threads without
//! external locking.
//!
//! ## Example
//!
//! ```no_run
//! use device_attest::{create_jws, did_from_privkey};
//!
//! # fn main() -> device_attest::Result<()> {
//! let privkey: [u8; 32] = [7u8; 32]; // your device private key
//!
//! let did = did_from_privkey(&privkey)?;
//! assert!(did.starts_with("did:key:z"));
//!
//! let envelope = create_jws(r#"{"temperature":23.4}"#, &privkey)?;
//! assert_eq!(envelope.split('.').count(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod codec;
pub mod error;
mod jws;
mod key;
mod submit;

pub use jws::{create_jws, ES256K_HEADER};
pub use key::{
    compressed_pubkey, did_from_privkey, did_from_privkey_into, did_from_pubkey,
    did_from_pubkey_into, MIN_DID_BUF, MULTICODEC_SECP256K1, RECOMMENDED_DID_BUF,
};
pub use submit::{
    sign_and_submit, submission_body, submit, unix_timestamp, HttpTransport, Transport,
    SUBMIT_PATH,
};

/// Result type for the SDK.
pub type Result<T, E = error::Error> = core::result::Result<T, E>;
