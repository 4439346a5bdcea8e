//! Unpadded base64url encoding.
//!
//! The table transform is delegated to [`base64ct`], which already emits the
//! `-`/`_` alphabet with no `=` padding, so the returned length is the
//! unpadded length by construction. This module adds the capacity contract:
//! the destination is checked against [`encoded_len`] before anything is
//! written.

use base64ct::{Base64UrlUnpadded, Encoding};

use crate::{error::Err, tracerr, Result};

/// Unpadded encoded length for an input of `input_len` bytes.
#[must_use]
pub const fn encoded_len(input_len: usize) -> usize {
    (input_len * 4 + 2) / 3
}

/// Encode `src` as an unpadded base64url string.
#[must_use]
pub fn encode(src: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(src)
}

/// Encode `src` into a caller-supplied buffer, returning the number of bytes
/// written.
///
/// # Errors
///
/// * `Err::BufferTooSmall` - `dst` is shorter than [`encoded_len`] of the
///   input. Nothing is written in that case.
pub fn encode_into(src: &[u8], dst: &mut [u8]) -> Result<usize> {
    let needed = encoded_len(src.len());
    if dst.len() < needed {
        tracerr!(
            Err::BufferTooSmall,
            "base64url output needs {needed} bytes, destination holds {}",
            dst.len()
        );
    }
    match Base64UrlUnpadded::encode(src, dst) {
        Ok(encoded) => Ok(encoded.len()),
        Err(e) => tracerr!(Err::BufferTooSmall, "base64url encoding failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(b"fo"), "Zm8");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg");
        assert_eq!(encode(b"fooba"), "Zm9vYmE");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn url_safe_alphabet() {
        // Standard base64 would produce '+' and '/' for these inputs.
        assert_eq!(encode(&[0xfb, 0xef]), "--8");
        assert_eq!(encode(&[0xff, 0xff, 0xff]), "____");
    }

    #[test]
    fn no_padding_for_any_length() {
        for len in 0..16 {
            let input = vec![0xa5u8; len];
            let encoded = encode(&input);
            assert!(!encoded.contains('='), "padding in encoding of {len} bytes");
            assert_eq!(encoded.len(), encoded_len(len));
        }
    }

    #[test]
    fn round_trip() {
        for len in [0usize, 1, 2, 3, 32, 64, 255] {
            let input: Vec<u8> = (0..len).map(|i| (i * 7 + 13) as u8).collect();
            let decoded =
                Base64UrlUnpadded::decode_vec(&encode(&input)).expect("should decode");
            assert_eq!(decoded, input);
        }
    }

    #[test]
    fn encode_into_matches_encode() {
        let input = b"{\"temperature\":23.4}";
        let mut buf = [0u8; 64];
        let written = encode_into(input, &mut buf).expect("should encode");
        assert_eq!(&buf[..written], encode(input).as_bytes());
    }

    #[test]
    fn encode_into_rejects_small_buffer() {
        let mut buf = [0u8; 3];
        let err = encode_into(b"foobar", &mut buf).expect_err("expected error");
        assert!(err.is(crate::error::Err::BufferTooSmall));
        assert_eq!(buf, [0u8; 3], "nothing should be written on failure");
    }
}
