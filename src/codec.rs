//! Binary-to-text codecs shared by the DID and JWS layers.
//!
//! Both codecs are pure functions with no state between calls. Each exposes
//! an allocating `encode` plus an `encode_into` variant that writes to a
//! caller-supplied buffer, with the required capacity checked before a single
//! byte is written.

pub mod base58;
pub mod base64url;
