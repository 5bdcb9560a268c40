//! Error types shared by every cipher family and mode.

use thiserror::Error;

use crate::mode::Mode;

/// Failures raised while configuring a cipher or processing a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The mode chains blocks but no IV was supplied.
    #[error("{mode} mode requires an IV")]
    MissingIv {
        /// Mode that was being configured.
        mode: Mode,
    },

    /// The IV does not match the cipher block size.
    #[error("invalid IV length {actual} (must be {expected} bytes)")]
    InvalidIvLength {
        /// Block size of the cipher.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// The key is not one of the sizes the cipher accepts.
    #[error("invalid key length {actual} (must be 16, 24 or 32 bytes)")]
    InvalidKeyLength {
        /// Length that was supplied.
        actual: usize,
    },

    /// A mode selector did not name a supported mode.
    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    /// Ciphertext handed to a block-aligned mode is not a block multiple.
    #[error("input length {length} is not a multiple of the {block_size}-byte block size")]
    InvalidInputLength {
        /// Length of the rejected input.
        length: usize,
        /// Block size of the cipher.
        block_size: usize,
    },

    /// Trailing padding bytes are malformed.
    #[error("invalid padding")]
    InvalidPadding,

    /// The cipher's block size is zero, or too wide for the padding scheme.
    #[error("invalid block size (must be > 0, and at most 255 for padded modes)")]
    InvalidBlockSize,
}

/// Result alias used throughout the cipher crates.
pub type Result<T> = std::result::Result<T, CipherError>;
