//! ECB (Electronic Codebook) mode.

use crate::cipher::BlockCipher;
use crate::error::{CipherError, Result};
use crate::modes::validate_block_size;
use crate::padding::{Padding, Pkcs7};

/// ECB mode: every block is transformed independently.
///
/// Identical plaintext blocks produce identical ciphertext blocks. There is
/// no chaining state, so `encrypt`/`decrypt` borrow `self` immutably.
#[derive(Debug)]
pub struct Ecb<C> {
    cipher: C,
    padding: Box<dyn Padding>,
}

impl<C: BlockCipher> Ecb<C> {
    /// ECB with PKCS#7 padding.
    pub fn new(cipher: C) -> Result<Self> {
        Self::with_padding(cipher, Box::new(Pkcs7))
    }

    /// ECB with a caller-chosen padding scheme.
    pub fn with_padding(cipher: C, padding: Box<dyn Padding>) -> Result<Self> {
        validate_block_size(&cipher)?;
        Ok(Self { cipher, padding })
    }

    /// Underlying block cipher.
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Pads and encrypts `plaintext`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        let mut data = self.padding.pad(plaintext, block_size)?;
        check_aligned(&data, block_size)?;
        for block in data.chunks_exact_mut(block_size) {
            self.cipher.encrypt_block(block);
        }
        Ok(data)
    }

    /// Decrypts `ciphertext` and strips its padding.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        check_aligned(ciphertext, block_size)?;
        let mut data = ciphertext.to_vec();
        for block in data.chunks_exact_mut(block_size) {
            self.cipher.decrypt_block(block);
        }
        let len = self.padding.unpad(&data, block_size)?.len();
        data.truncate(len);
        Ok(data)
    }
}

pub(crate) fn check_aligned(data: &[u8], block_size: usize) -> Result<()> {
    if data.len() % block_size != 0 {
        return Err(CipherError::InvalidInputLength {
            length: data.len(),
            block_size,
        });
    }
    Ok(())
}
