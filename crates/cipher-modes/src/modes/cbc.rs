//! CBC (Cipher Block Chaining) mode.

use crate::cipher::{xor_in_place, BlockCipher};
use crate::error::Result;
use crate::modes::ecb::check_aligned;
use crate::modes::{validate_block_size, Chain};
use crate::padding::{Padding, Pkcs7};

/// CBC mode: each plaintext block is XORed with the previous ciphertext
/// block before encryption.
///
/// The chain continues across calls in each direction; use
/// [`Cbc::reset`] to start a fresh message from the IV.
#[derive(Debug)]
pub struct Cbc<C> {
    cipher: C,
    padding: Box<dyn Padding>,
    chain: Chain,
}

impl<C: BlockCipher> Cbc<C> {
    /// CBC with PKCS#7 padding.
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        Self::with_padding(cipher, iv, Box::new(Pkcs7))
    }

    /// CBC with a caller-chosen padding scheme.
    pub fn with_padding(cipher: C, iv: &[u8], padding: Box<dyn Padding>) -> Result<Self> {
        let block_size = validate_block_size(&cipher)?;
        let chain = Chain::new(iv, block_size)?;
        Ok(Self {
            cipher,
            padding,
            chain,
        })
    }

    /// Underlying block cipher.
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// IV supplied at construction (or by the last [`Cbc::reset_with_iv`]).
    pub fn iv(&self) -> &[u8] {
        self.chain.iv()
    }

    /// Pads and encrypts `plaintext`, continuing the encrypt chain.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        let mut data = self.padding.pad(plaintext, block_size)?;
        check_aligned(&data, block_size)?;

        let prev = &mut self.chain.enc.register;
        for block in data.chunks_exact_mut(block_size) {
            xor_in_place(block, prev);
            self.cipher.encrypt_block(block);
            prev.copy_from_slice(block);
        }
        Ok(data)
    }

    /// Decrypts `ciphertext`, continuing the decrypt chain, and strips padding.
    ///
    /// The chain only advances when the whole call succeeds.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        check_aligned(ciphertext, block_size)?;

        let mut prev = self.chain.dec.register.clone();
        let mut data = ciphertext.to_vec();
        for (block, consumed) in data
            .chunks_exact_mut(block_size)
            .zip(ciphertext.chunks_exact(block_size))
        {
            self.cipher.decrypt_block(block);
            xor_in_place(block, &prev);
            prev.copy_from_slice(consumed);
        }

        let len = self.padding.unpad(&data, block_size)?.len();
        data.truncate(len);
        self.chain.dec.register = prev;
        Ok(data)
    }

    /// Restores both directions to the construction IV.
    pub fn reset(&mut self) {
        self.chain.reset();
    }

    /// Installs a new IV and restarts both directions from it.
    pub fn reset_with_iv(&mut self, iv: &[u8]) -> Result<()> {
        self.chain.reset_with_iv(iv)
    }
}
