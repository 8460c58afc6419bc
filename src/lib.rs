//! XXTEA (Corrected Block TEA) symmetric cipher.
//!
//! XXTEA encrypts and decrypts variable-length byte buffers with a
//! 128-bit key, treating the whole message as one large block: every
//! 32-bit word is mixed with its ring neighbors over a length-derived
//! number of rounds, so a single flipped ciphertext bit corrupts the
//! entire plaintext.
//!
//! Ciphertext is byte-for-byte compatible with other XXTEA
//! implementations using the little-endian word convention.
//!
//! # Architecture
//!
//! ```text
//! codec   (byte buffer ⇄ little-endian u32 words, length sentinel)
//!     ↓ words
//! cipher  (ring of mix() steps, 6 + 52/(n+1) rounds, DELTA schedule)
//!     ↓ words
//! codec   (words → bytes, sentinel-validated truncation on decrypt)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! let key = b"0123456789abcdef";
//!
//! let ciphertext = xxtea::encrypt(b"Hello XXTEA!", key);
//! assert_ne!(ciphertext.as_slice(), b"Hello XXTEA!".as_slice());
//!
//! let plaintext = xxtea::decrypt(&ciphertext, key).unwrap();
//! assert_eq!(plaintext, b"Hello XXTEA!");
//! ```
//!
//! Corrupted ciphertext is rejected rather than decrypted to garbage:
//!
//! ```
//! use xxtea::error::XxteaError;
//!
//! let key = b"0123456789abcdef";
//! let mut ciphertext = xxtea::encrypt(b"Hello XXTEA!", key);
//! *ciphertext.last_mut().unwrap() ^= 0x01;
//!
//! assert_eq!(xxtea::decrypt(&ciphertext, key), Err(XxteaError::MalformedCiphertext));
//! ```
//!
//! # Key handling
//!
//! Keys of 0 to 16 bytes are zero-padded to 128 bits; key material
//! beyond 16 bytes is silently ignored. Both are long-standing XXTEA
//! wire-compatibility behaviors, kept as-is so ciphertext exchanged
//! with other implementations keeps decrypting.
//!
//! # Security
//!
//! This crate faithfully reproduces the XXTEA transform and claims
//! nothing beyond that. There is no authentication: the length-sentinel
//! check catches most corruption but is not a MAC. Known cryptanalytic
//! results against XXTEA exist; prefer a modern AEAD unless you need
//! XXTEA wire compatibility.

#![deny(clippy::all)]

pub mod codec;
pub mod error;

mod cipher;

pub use cipher::{decrypt, encrypt};
