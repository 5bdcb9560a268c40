//! OFB (Output Feedback) mode.

use crate::cipher::BlockCipher;
use crate::error::Result;
use crate::modes::{validate_block_size, Chain, Feedback};

/// OFB mode: the keystream is the iterated encryption of the IV and never
/// depends on the message, so encryption and decryption are the same
/// operation.
#[derive(Debug)]
pub struct Ofb<C> {
    cipher: C,
    chain: Chain,
}

impl<C: BlockCipher> Ofb<C> {
    /// Creates an OFB stream seeded from `iv`.
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        let block_size = validate_block_size(&cipher)?;
        let chain = Chain::new(iv, block_size)?;
        Ok(Self { cipher, chain })
    }

    /// Underlying block cipher.
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// IV supplied at construction (or by the last [`Ofb::reset_with_iv`]).
    pub fn iv(&self) -> &[u8] {
        self.chain.iv()
    }

    /// Encrypts `plaintext`, continuing the encrypt stream.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Vec<u8> {
        apply(&self.cipher, &mut self.chain.enc, plaintext)
    }

    /// Decrypts `ciphertext`, continuing the decrypt stream.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Vec<u8> {
        apply(&self.cipher, &mut self.chain.dec, ciphertext)
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

fn apply<C: BlockCipher>(cipher: &C, fb: &mut Feedback, input: &[u8]) -> Vec<u8> {
    let block_size = fb.register.len();
    let mut output = input.to_vec();
    for byte in output.iter_mut() {
        if fb.used == block_size {
            cipher.encrypt_block(&mut fb.register);
            fb.keystream.copy_from_slice(&fb.register);
            fb.used = 0;
        }
        *byte ^= fb.keystream[fb.used];
        fb.used += 1;
    }
    output
}
