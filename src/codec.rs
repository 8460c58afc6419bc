//! Byte-buffer to 32-bit-word conversion.
//!
//! XXTEA operates on sequences of unsigned 32-bit words, but callers
//! hand it arbitrary byte strings. This module packs bytes into
//! little-endian words (zero-padding the tail group) and unpacks them
//! back, carrying the original byte length through the round trip in a
//! trailing sentinel word so non-multiple-of-4 lengths survive exactly.
//!
//! The little-endian 4-bytes-per-word layout is a wire-format contract:
//! ciphertext interoperates with any XXTEA implementation using the
//! same convention.

use crate::error::XxteaError;

/// Converts a byte slice to a `Vec<u32>` using little-endian byte ordering.
///
/// The input is right-padded with zero bytes up to the next multiple of
/// 4, then each 4-byte group is packed as an unsigned 32-bit
/// little-endian integer, preserving group order.
///
/// # Parameters
/// - `input`: Byte slice of any length, including empty.
/// - `append_length`: If `true`, one extra word holding the original
///   (pre-padding) byte length of `input` is appended. This sentinel
///   lets [`words_to_bytes_truncated`] recover the exact byte length
///   even though the buffer was rounded up to a multiple of 4.
///
/// # Returns
/// A `Vec<u32>` of `ceil(input.len() / 4)` words, plus one sentinel
/// word when `append_length` is `true`. The empty input with
/// `append_length == true` yields `[0]`.
pub fn bytes_to_words(input: &[u8], append_length: bool) -> Vec<u32> {
    let num_words = input.len().div_ceil(4);
    let mut words = Vec::with_capacity(num_words + usize::from(append_length));
    for chunk in input.chunks(4) {
        let mut group = [0u8; 4];
        group[..chunk.len()].copy_from_slice(chunk);
        words.push(u32::from_le_bytes(group));
    }
    if append_length {
        words.push(input.len() as u32);
    }
    words
}

/// Converts a slice of `u32` words to a `Vec<u8>` using little-endian
/// byte ordering.
///
/// Every word is unpacked as 4 little-endian bytes and concatenated in
/// order. Used on the encryption path, where the sentinel word has been
/// mixed into the ciphertext and every word represents real output.
///
/// # Parameters
/// - `words`: Slice of `u32` values.
///
/// # Returns
/// A `Vec<u8>` containing `words.len() * 4` bytes.
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    let mut output = Vec::with_capacity(words.len() * 4);
    for &word in words {
        output.extend_from_slice(&word.to_le_bytes());
    }
    output
}

/// Converts a slice of `u32` words to a `Vec<u8>`, interpreting the last
/// word as the length sentinel and truncating to that byte length.
///
/// With `n` the nominal byte length of the buffer excluding the
/// sentinel word (`4 * (words.len() - 1)`), the sentinel value `m` must
/// satisfy `n - 3 <= m <= n`: the original plaintext can only have been
/// shorter than the padded buffer by the 0 to 3 zero bytes of tail
/// padding. Anything else means the ciphertext was corrupted or
/// truncated, and returning a wrong-length buffer would be a silent
/// correctness failure, so the call fails instead.
///
/// # Parameters
/// - `words`: Slice of `u32` values whose last element is the sentinel.
///
/// # Returns
/// A `Vec<u8>` of exactly `m` bytes.
///
/// # Errors
/// Returns [`XxteaError::MalformedCiphertext`] if `words` is empty or
/// the sentinel fails its bounds check.
pub fn words_to_bytes_truncated(words: &[u32]) -> Result<Vec<u8>, XxteaError> {
    let Some((&sentinel, body)) = words.split_last() else {
        return Err(XxteaError::MalformedCiphertext);
    };
    let nominal = body.len() * 4;
    let length = sentinel as usize;
    if length < nominal.saturating_sub(3) || length > nominal {
        return Err(XxteaError::MalformedCiphertext);
    }
    let mut output = words_to_bytes(body);
    output.truncate(length);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_words_basic() {
        let words = bytes_to_words(b"abcdefgh", false);
        assert_eq!(words, vec![0x6463_6261, 0x6867_6665]);
    }

    #[test]
    fn test_bytes_to_words_pads_tail_group() {
        let words = bytes_to_words(b"abcdef", false);
        assert_eq!(words, vec![0x6463_6261, 0x0000_6665]);
    }

    #[test]
    fn test_bytes_to_words_appends_length() {
        let words = bytes_to_words(b"abcdef", true);
        assert_eq!(words, vec![0x6463_6261, 0x0000_6665, 6]);
    }

    #[test]
    fn test_bytes_to_words_empty() {
        assert!(bytes_to_words(&[], false).is_empty());
        assert_eq!(bytes_to_words(&[], true), vec![0]);
    }

    #[test]
    fn test_words_to_bytes_basic() {
        let bytes = words_to_bytes(&[0x6463_6261, 0x6867_6665]);
        assert_eq!(bytes, b"abcdefgh");
    }

    #[test]
    fn test_words_to_bytes_empty() {
        assert!(words_to_bytes(&[]).is_empty());
    }

    #[test]
    fn test_roundtrip_exact_multiple() {
        let original = b"12345678";
        let words = bytes_to_words(original, true);
        let bytes = words_to_bytes_truncated(&words).unwrap();
        assert_eq!(bytes, original);
    }

    #[test]
    fn test_roundtrip_all_padding_amounts() {
        for len in [0usize, 1, 2, 3, 4, 5, 6, 7, 8] {
            let original: Vec<u8> = (0..len as u8).collect();
            let words = bytes_to_words(&original, true);
            let bytes = words_to_bytes_truncated(&words).unwrap();
            assert_eq!(bytes, original, "roundtrip failed for length {}", len);
        }
    }

    #[test]
    fn test_truncated_rejects_sentinel_too_large() {
        // Nominal length 4, sentinel claims 5.
        let words = vec![0x6463_6261, 5];
        assert_eq!(
            words_to_bytes_truncated(&words),
            Err(XxteaError::MalformedCiphertext)
        );
    }

    #[test]
    fn test_truncated_rejects_sentinel_too_small() {
        // Nominal length 8, padding can only hide 3 bytes, sentinel claims 4.
        let words = vec![1, 2, 4];
        assert_eq!(
            words_to_bytes_truncated(&words),
            Err(XxteaError::MalformedCiphertext)
        );
    }

    #[test]
    fn test_truncated_accepts_sentinel_bounds() {
        // Nominal length 8: sentinels 5 through 8 are valid, 4 and 9 are not.
        for m in 5u32..=8 {
            let words = vec![0, 0, m];
            assert_eq!(words_to_bytes_truncated(&words).unwrap().len(), m as usize);
        }
        assert!(words_to_bytes_truncated(&[0, 0, 4]).is_err());
        assert!(words_to_bytes_truncated(&[0, 0, 9]).is_err());
    }

    #[test]
    fn test_truncated_single_word_requires_zero() {
        // One word is sentinel only: nominal length 0, so m must be 0.
        assert_eq!(words_to_bytes_truncated(&[0]).unwrap(), Vec::<u8>::new());
        assert!(words_to_bytes_truncated(&[1]).is_err());
    }

    #[test]
    fn test_truncated_rejects_empty() {
        assert_eq!(
            words_to_bytes_truncated(&[]),
            Err(XxteaError::MalformedCiphertext)
        );
    }
}
