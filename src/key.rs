//! # DID Key Derivation
//!
//! Derives a self-certifying `did:key` identifier from a secp256k1 key pair.
//! The identifier encodes the multicodec-tagged compressed public key in
//! multibase form:
//!
//! ```text
//! did:key:z<base58btc(0xe7 0x01 || 33-byte compressed public key)>
//! ```
//!
//! The encoding is byte-exact per the `did:key` method specification; a
//! given public key always derives the identical identifier.
//!
//! See:
//!
//! - <https://w3c-ccg.github.io/did-method-key>

use k256::ecdsa::SigningKey;

use crate::codec::base58;
use crate::{error::Err, tracerr, Result};

/// Multicodec tag for a secp256k1 public key, prepended to the compressed
/// point before base58 encoding.
pub const MULTICODEC_SECP256K1: [u8; 2] = [0xe7, 0x01];

/// Smallest destination the `*_into` variants accept. A secp256k1 `did:key`
/// never exceeds this, so the floor is checked before the exact length is
/// known.
pub const MIN_DID_BUF: usize = 64;

/// Recommended destination capacity for the `*_into` variants.
pub const RECOMMENDED_DID_BUF: usize = 128;

const DID_KEY_PREFIX: &str = "did:key:z";

/// Derive the `did:key` identifier for a compressed secp256k1 public key.
#[must_use]
pub fn did_from_pubkey(pubkey: &[u8; 33]) -> String {
    let mut tagged = [0u8; 35];
    tagged[..2].copy_from_slice(&MULTICODEC_SECP256K1);
    tagged[2..].copy_from_slice(pubkey);
    format!("{DID_KEY_PREFIX}{}", base58::encode(&tagged))
}

/// Derive the `did:key` identifier for a public key into a caller-supplied
/// buffer, returning the number of bytes written.
///
/// # Errors
///
/// * `Err::BufferTooSmall` - `dst` is shorter than [`MIN_DID_BUF`] or cannot
///   hold the rendered identifier. Nothing is written in that case.
pub fn did_from_pubkey_into(pubkey: &[u8; 33], dst: &mut [u8]) -> Result<usize> {
    if dst.len() < MIN_DID_BUF {
        tracerr!(
            Err::BufferTooSmall,
            "DID destination holds {} bytes, minimum is {MIN_DID_BUF}",
            dst.len()
        );
    }

    let did = did_from_pubkey(pubkey);
    if dst.len() < did.len() {
        tracerr!(
            Err::BufferTooSmall,
            "DID needs {} bytes, destination holds {}",
            did.len(),
            dst.len()
        );
    }
    dst[..did.len()].copy_from_slice(did.as_bytes());
    Ok(did.len())
}

/// Derive the `did:key` identifier for a private key.
///
/// The public key is computed by multiplying the curve base point by the
/// private scalar; `k256` performs the multiplication in constant time, so
/// no randomization step is involved and the result is fully deterministic.
///
/// # Errors
///
/// * `Err::CryptoError` - the scalar is not a valid secp256k1 private key
///   (zero, or not below the curve order).
pub fn did_from_privkey(privkey: &[u8; 32]) -> Result<String> {
    Ok(did_from_pubkey(&compressed_pubkey(privkey)?))
}

/// Derive the `did:key` identifier for a private key into a caller-supplied
/// buffer, returning the number of bytes written.
///
/// # Errors
///
/// * `Err::CryptoError` - the scalar is not a valid secp256k1 private key.
/// * `Err::BufferTooSmall` - `dst` is shorter than [`MIN_DID_BUF`] or cannot
///   hold the rendered identifier. Nothing is written in that case.
pub fn did_from_privkey_into(privkey: &[u8; 32], dst: &mut [u8]) -> Result<usize> {
    if dst.len() < MIN_DID_BUF {
        tracerr!(
            Err::BufferTooSmall,
            "DID destination holds {} bytes, minimum is {MIN_DID_BUF}",
            dst.len()
        );
    }
    did_from_pubkey_into(&compressed_pubkey(privkey)?, dst)
}

/// Derive the 33-byte SEC1 compressed public key for a private key.
///
/// # Errors
///
/// * `Err::CryptoError` - the scalar is not a valid secp256k1 private key.
pub fn compressed_pubkey(privkey: &[u8; 32]) -> Result<[u8; 33]> {
    let Ok(key) = SigningKey::from_slice(privkey) else {
        tracerr!(Err::CryptoError, "scalar is not a valid secp256k1 private key");
    };
    let point = key.verifying_key().to_encoded_point(true);
    match <[u8; 33]>::try_from(point.as_bytes()) {
        Ok(pubkey) => Ok(pubkey),
        Err(_) => tracerr!(
            Err::CryptoError,
            "compressed point export returned {} bytes",
            point.as_bytes().len()
        ),
    }
}
