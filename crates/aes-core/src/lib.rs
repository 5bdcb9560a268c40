//! Rijndael (AES) block cipher with whole-message modes of operation.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedules for 128, 192 and 256-bit keys.
//! - Single-block encryption and decryption.
//! - An [`Aes`] type implementing [`cipher_modes::BlockCipher`], so it can be
//!   driven through ECB, CBC, CFB or OFB by [`new_cipher`].
//!
//! ```rust
//! use aes_core::{new_cipher, CipherOptions, Mode};
//!
//! let key = [0x2bu8; 16];
//! let options = CipherOptions::new(Mode::Cbc).with_iv([0u8; 16]);
//! let mut cipher = new_cipher(&key, options)?;
//! let ciphertext = cipher.encrypt(b"attack at dawn")?;
//! assert_eq!(ciphertext.len(), 16);
//! assert_eq!(cipher.decrypt(&ciphertext)?, b"attack at dawn");
//! # Ok::<(), aes_core::CipherError>(())
//! ```
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod aes;
mod block;
mod cipher;
mod gf;
mod key;
mod round;
mod sbox;

pub use crate::aes::{new_cipher, Aes};
pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, RCON};
pub use crate::gf::{double, mul};
pub use crate::key::{AesKey, KeySize, RoundKeys};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
pub use cipher_modes::{BlockCipher, CipherError, CipherOptions, Mode, ModeCipher, Pkcs7, Result};
