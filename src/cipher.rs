//! XXTEA round transform.
//!
//! Implements the Corrected Block TEA round network: a Feistel-like
//! mixing function applied in a ring over the whole word buffer, with a
//! round count derived from the message length. The sentinel word
//! appended by the codec layer sits at ring position `n`, adjacent to
//! position `0`, so it is fully mixed into the ciphertext rather than
//! carried in clear.
//!
//! All arithmetic is exact unsigned modulo-2^32: `u32` with wrapping
//! add/sub/mul and logical shifts. Any deviation diverges silently from
//! ciphertext produced by other XXTEA implementations.

use crate::codec::{bytes_to_words, words_to_bytes, words_to_bytes_truncated};
use crate::error::XxteaError;

/// Additive round constant, derived from the golden ratio.
const DELTA: u32 = 0x9E37_79B9;

/// Computes the nonlinear mixing term for one word update.
///
/// Combines the two neighboring words `y` and `z`, the running `sum`,
/// and one of the 4 key words selected by `(p & 3) ^ e`. Encryption and
/// decryption share this function unchanged; decryption runs the
/// surrounding loop in reverse and subtracts instead of adds, which is
/// what makes the transform invertible.
#[inline]
fn mix(sum: u32, y: u32, z: u32, p: usize, e: usize, key: &[u32; 4]) -> u32 {
    (((z >> 5) ^ (y << 2)).wrapping_add((y >> 3) ^ (z << 4)))
        ^ ((sum ^ y).wrapping_add(key[(p & 3) ^ e] ^ z))
}

/// Normalizes key material to exactly 4 words.
///
/// Short keys are zero-padded on the right; key material beyond the
/// first 16 bytes is silently ignored, since the mixing function only
/// ever consults key words 0 through 3. Both behaviors are preserved
/// wire-compatible semantics shared by deployed XXTEA implementations
/// and must not be "fixed".
fn fix_key(key: &[u8]) -> [u32; 4] {
    let words = bytes_to_words(key, false);
    let mut k = [0u32; 4];
    for (slot, &word) in k.iter_mut().zip(words.iter()) {
        *slot = word;
    }
    k
}

/// Length-dependent round count: `6 + 52 / (n + 1)` full passes over
/// the buffer, where `n + 1` is the word count. Between 7 and 58 rounds
/// for any message, so longer messages get fewer passes but every word
/// still receives ample mixing from its neighbors.
fn round_count(n: usize) -> usize {
    6 + 52 / (n + 1)
}

/// Encrypts a byte buffer with XXTEA.
///
/// The plaintext is packed into little-endian 32-bit words with its
/// byte length appended as a sentinel word, then the whole buffer is
/// scrambled in-place over a length-derived number of rounds. The
/// ciphertext is always a multiple of 4 bytes and at least 8 bytes for
/// non-empty input.
///
/// # Parameters
/// - `data`: Plaintext of any length, including empty.
/// - `key`: Key material of 0 to 16 bytes; shorter keys are zero-padded
///   to 128 bits, bytes beyond the first 16 are ignored.
///
/// # Returns
/// The ciphertext. Empty input yields empty output; this is the defined
/// degenerate case, not an error. Encryption has no failure paths.
///
/// # Examples
///
/// ```
/// let ciphertext = xxtea::encrypt(b"Hello XXTEA!", b"0123456789abcdef");
/// assert_eq!(ciphertext.len(), 16);
/// ```
pub fn encrypt(data: &[u8], key: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut v = bytes_to_words(data, true);
    let k = fix_key(key);
    let n = v.len() - 1;
    let mut z = v[n];
    let mut sum: u32 = 0;
    for _ in 0..round_count(n) {
        sum = sum.wrapping_add(DELTA);
        let e = ((sum >> 2) & 3) as usize;
        for p in 0..n {
            let y = v[p + 1];
            v[p] = v[p].wrapping_add(mix(sum, y, z, p, e, &k));
            z = v[p];
        }
        // Wraparound step: position n and position 0 are ring neighbors,
        // so the sentinel word is mixed like any other.
        let y = v[0];
        v[n] = v[n].wrapping_add(mix(sum, y, z, n, e, &k));
        z = v[n];
    }
    words_to_bytes(&v)
}

/// Decrypts an XXTEA ciphertext.
///
/// Runs the round network in reverse, then reads the recovered length
/// sentinel to strip the tail padding and return the plaintext at its
/// exact original byte length.
///
/// # Parameters
/// - `data`: Ciphertext produced by [`encrypt`] with the same key.
/// - `key`: Key material, normalized exactly as in [`encrypt`].
///
/// # Returns
/// The plaintext. Empty input yields empty output.
///
/// # Errors
/// Returns [`XxteaError::MalformedCiphertext`] if `data` is non-empty
/// but shorter than one 32-bit word, or if the recovered length
/// sentinel is inconsistent with the buffer size (corrupted or
/// truncated ciphertext, or a wrong key). The failure is deterministic;
/// retrying cannot succeed.
///
/// # Examples
///
/// ```
/// let key = b"0123456789abcdef";
/// let ciphertext = xxtea::encrypt(b"Hello XXTEA!", key);
/// let plaintext = xxtea::decrypt(&ciphertext, key).unwrap();
/// assert_eq!(plaintext, b"Hello XXTEA!");
/// ```
pub fn decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, XxteaError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    if data.len() < 4 {
        return Err(XxteaError::MalformedCiphertext);
    }
    let mut v = bytes_to_words(data, false);
    let k = fix_key(key);
    let n = v.len() - 1;
    let mut y = v[0];
    // sum starts at q * DELTA and steps down by DELTA each pass, so the
    // loop runs exactly as many rounds as encryption did. This relies
    // on wrapping arithmetic being exact.
    let mut sum = (round_count(n) as u32).wrapping_mul(DELTA);
    while sum != 0 {
        let e = ((sum >> 2) & 3) as usize;
        for p in (1..=n).rev() {
            let z = v[p - 1];
            v[p] = v[p].wrapping_sub(mix(sum, y, z, p, e, &k));
            y = v[p];
        }
        let z = v[n];
        v[0] = v[0].wrapping_sub(mix(sum, y, z, 0, e, &k));
        y = v[0];
        sum = sum.wrapping_sub(DELTA);
    }
    words_to_bytes_truncated(&v)
}
