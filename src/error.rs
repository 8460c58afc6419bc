//! Error types for the XXTEA library.

use std::fmt;

/// Errors produced by the XXTEA library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XxteaError {
    /// Ciphertext is not a valid XXTEA encryption result: either it is
    /// non-empty but shorter than one 32-bit word, or the embedded
    /// length sentinel recovered during decryption is inconsistent with
    /// the buffer size. Retrying with the same input fails identically;
    /// callers should treat this as a permanent rejection.
    MalformedCiphertext,
}

impl fmt::Display for XxteaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XxteaError::MalformedCiphertext => {
                write!(f, "Ciphertext is malformed or was not produced by XXTEA")
            }
        }
    }
}

impl std::error::Error for XxteaError {}
