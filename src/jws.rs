//! # JWS Creation
//!
//! Builds the ES256K compact serialization: the fixed header and the
//! caller's JSON payload are base64url-encoded, joined with `.` to form the
//! signing input, hashed with SHA-256 and signed with ECDSA over secp256k1.
//! The signature is folded to its low-s form before serialization, so every
//! envelope carries the single canonical encoding strict verifiers accept.
//!
//! The payload is opaque to this module: it is neither parsed nor validated,
//! only signed.

use k256::ecdsa::signature::RandomizedDigestSigner;
use k256::ecdsa::{Signature, SigningKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::codec::base64url;
use crate::{error::Err, tracerr, Result};

/// The fixed ES256K protected header, serialized without whitespace. The
/// header segment of every envelope produced by this module is its base64url
/// encoding.
pub const ES256K_HEADER: &str = r#"{"alg":"ES256K","typ":"JWS"}"#;

/// Create an ES256K compact JWS over `payload_json`.
///
/// The ECDSA nonce draws fresh randomness on every call, so two envelopes
/// over the same payload may carry different signature segments; the header
/// segment is constant and verifiers need only signature validity, not
/// reproducibility.
///
/// # Errors
///
/// * `Err::InvalidInput` - the payload is empty.
/// * `Err::CryptoError` - key import or signing failed. No partial envelope
///   is produced.
pub fn create_jws(payload_json: &str, privkey: &[u8; 32]) -> Result<String> {
    if payload_json.is_empty() {
        tracerr!(Err::InvalidInput, "payload is empty");
    }

    let header_b64 = base64url::encode(ES256K_HEADER.as_bytes());
    let payload_b64 = base64url::encode(payload_json.as_bytes());
    let signing_input = format!("{header_b64}.{payload_b64}");

    let Ok(key) = SigningKey::from_slice(privkey) else {
        tracerr!(Err::CryptoError, "scalar is not a valid secp256k1 private key");
    };

    let digest = Sha256::new_with_prefix(signing_input.as_bytes());
    let signature: Signature = match key.try_sign_digest_with_rng(&mut OsRng, digest) {
        Ok(signature) => signature,
        Err(e) => tracerr!(Err::CryptoError, "ECDSA signing failed: {e}"),
    };

    // Fold s into the lower half of the curve order. ECDSA admits two valid
    // encodings per signature; strict verifiers reject the high-s one.
    let signature = signature.normalize_s().unwrap_or(signature);

    let sig_b64 = base64url::encode(&signature.to_bytes());
    Ok(format!("{signing_input}.{sig_b64}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn header_is_canonical_json() {
        let parsed: serde_json::Value =
            serde_json::from_str(ES256K_HEADER).expect("header should be valid JSON");
        assert_eq!(parsed, json!({"alg": "ES256K", "typ": "JWS"}));
        assert_eq!(
            serde_json::to_string(&parsed).expect("should serialize"),
            ES256K_HEADER
        );
    }

    #[test]
    fn header_segment_is_fixed() {
        assert_eq!(
            base64url::encode(ES256K_HEADER.as_bytes()),
            "eyJhbGciOiJFUzI1NksiLCJ0eXAiOiJKV1MifQ"
        );
    }

    #[test]
    fn empty_payload_rejected() {
        let err = create_jws("", &[7u8; 32]).expect_err("expected error");
        assert!(err.is(Err::InvalidInput));
    }

    #[test]
    fn zero_scalar_rejected() {
        let err = create_jws("{\"test\":true}", &[0u8; 32]).expect_err("expected error");
        assert!(err.is(Err::CryptoError));
    }
}
