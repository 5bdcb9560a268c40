//! Block cipher modes of operation.
//!
//! This crate chains single-block transforms into whole-message encryption
//! and is written against the [`BlockCipher`] capability only; any cipher
//! family that implements it can be driven in:
//! - **ECB**, independent blocks with padding.
//! - **CBC**, chained blocks with padding and an IV.
//! - **CFB** and **OFB**, stream modes with an IV and no padding.
//!
//! ```rust
//! use cipher_modes::{BlockCipher, CipherOptions, Mode, ModeCipher};
//!
//! struct Rot13;
//!
//! impl BlockCipher for Rot13 {
//!     fn block_size(&self) -> usize { 4 }
//!     fn encrypt_block(&self, block: &mut [u8]) {
//!         block.iter_mut().for_each(|b| *b = b.wrapping_add(13));
//!     }
//!     fn decrypt_block(&self, block: &mut [u8]) {
//!         block.iter_mut().for_each(|b| *b = b.wrapping_sub(13));
//!     }
//! }
//!
//! let options = CipherOptions::new(Mode::Cbc).with_iv(*b"iv!!");
//! let mut cipher = ModeCipher::new(Rot13, options)?;
//! let ciphertext = cipher.encrypt(b"attack at dawn")?;
//! assert_eq!(cipher.decrypt(&ciphertext)?, b"attack at dawn");
//! # Ok::<(), cipher_modes::CipherError>(())
//! ```
//!
//! Modes other than ECB hold mutable feedback state and must not be shared
//! between concurrent callers; build one instance per message stream.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher;
pub mod error;
pub mod mode;
pub mod modes;
pub mod options;
pub mod padding;

pub use crate::cipher::BlockCipher;
pub use crate::error::{CipherError, Result};
pub use crate::mode::Mode;
pub use crate::modes::{validate_iv, Cbc, Cfb, Ecb, ModeCipher, Ofb};
pub use crate::options::CipherOptions;
pub use crate::padding::{Padding, Pkcs7};
