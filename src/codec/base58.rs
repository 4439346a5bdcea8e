//! Base58btc encoding using the Bitcoin alphabet.
//!
//! The alphabet drops the visually ambiguous characters `0`, `O`, `I` and
//! `l`. Leading zero bytes are significant: each one encodes to a literal
//! `'1'`, and the remainder of the input is treated as a big-endian integer
//! and long-divided by 58.

use crate::{error::Err, tracerr, Result};

/// The 58-symbol Bitcoin alphabet.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Worst-case encoded length for an input of `input_len` bytes.
///
/// `log(256) / log(58)` is just under 1.38, so `input_len * 138 / 100 + 1`
/// symbols always suffice. Callers supplying their own buffer to
/// [`encode_into`] can size it with this.
#[must_use]
pub const fn encoded_len(input_len: usize) -> usize {
    input_len * 138 / 100 + 1
}

/// Encode `input` as a base58btc string.
#[must_use]
pub fn encode(input: &[u8]) -> String {
    encode_raw(input).into_iter().map(char::from).collect()
}

/// Encode `input` into a caller-supplied buffer, returning the number of
/// bytes written.
///
/// # Errors
///
/// * `Err::BufferTooSmall` - `dst` cannot hold the full encoding. Nothing is
///   written in that case.
pub fn encode_into(input: &[u8], dst: &mut [u8]) -> Result<usize> {
    let encoded = encode_raw(input);
    if dst.len() < encoded.len() {
        tracerr!(
            Err::BufferTooSmall,
            "base58 output needs {} bytes, destination holds {}",
            encoded.len(),
            dst.len()
        );
    }
    dst[..encoded.len()].copy_from_slice(&encoded);
    Ok(encoded.len())
}

/// Core conversion: leading `'1'`s for the zero run, then repeated division
/// of the remaining big-endian integer by 58, most significant digit first.
fn encode_raw(input: &[u8]) -> Vec<u8> {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    let size = encoded_len(input.len() - zeros);
    let mut digits = vec![0u8; size];
    for &byte in &input[zeros..] {
        let mut carry = usize::from(byte);
        for digit in digits.iter_mut().rev() {
            carry += 256 * usize::from(*digit);
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
    }

    // The working buffer is sized for the worst case, so it may carry its
    // own leading zero digits. Skip them; they are not part of the encoding.
    let start = digits.iter().take_while(|&&d| d == 0).count();

    let mut out = vec![b'1'; zeros];
    out.extend(digits[start..].iter().map(|&d| ALPHABET[usize::from(d)]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(encode(b"hello world"), "StV1DL6CwTryKyV");
        assert_eq!(encode(&[0xff]), "5Q");
        assert_eq!(encode(&[0x00, 0x01]), "12");
        assert_eq!(encode(&hex::decode("00000000287fb4cd").unwrap()), "1111233QC4");
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn leading_zeros_become_ones() {
        assert_eq!(encode(&[0x00]), "1");
        assert_eq!(encode(&[0x00, 0x00]), "11");
        assert_eq!(encode(b"\x00\x00hello world"), "11StV1DL6CwTryKyV");
    }

    #[test]
    fn zero_run_length_is_preserved() {
        for zeros in 0..8 {
            let mut input = vec![0u8; zeros];
            input.extend_from_slice(&[0x2a, 0x17, 0x99]);
            let encoded = encode(&input);
            let ones = encoded.bytes().take_while(|&b| b == b'1').count();
            assert_eq!(ones, zeros, "input with {zeros} zero bytes");
        }
    }

    #[test]
    fn encode_into_matches_encode() {
        let input = b"attested sensor reading";
        let mut buf = [0u8; 64];
        let written = encode_into(input, &mut buf).expect("should encode");
        assert_eq!(&buf[..written], encode(input).as_bytes());
    }

    #[test]
    fn encode_into_rejects_small_buffer() {
        let mut buf = [0u8; 4];
        let err = encode_into(b"hello world", &mut buf).expect_err("expected error");
        assert!(err.is(crate::error::Err::BufferTooSmall));
        assert_eq!(buf, [0u8; 4], "nothing should be written on failure");
    }

    #[test]
    fn matches_reference_encoder() {
        let inputs: &[&[u8]] = &[
            b"",
            &[0x00],
            &[0x00, 0x00, 0x01],
            &[0xe7, 0x01],
            b"The quick brown fox jumps over the lazy dog.",
            &[0xe7, 0x01, 0x02, 0x84, 0xbf, 0x75, 0x62, 0x26, 0x2b, 0xbd],
        ];
        for input in inputs {
            assert_eq!(encode(input), bs58::encode(input).into_string());
        }
    }
}
