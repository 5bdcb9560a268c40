//! CFB (Cipher Feedback) mode with full-block feedback.

use crate::cipher::BlockCipher;
use crate::error::Result;
use crate::modes::{validate_block_size, Chain, Feedback};

/// CFB mode: the keystream is the encryption of the previous ciphertext
/// block (the IV for the first block).
///
/// Both directions use the forward block transform. Output length always
/// equals input length; a trailing partial block leaves the rest of its
/// keystream pending for the next call.
#[derive(Debug)]
pub struct Cfb<C> {
    cipher: C,
    chain: Chain,
}

impl<C: BlockCipher> Cfb<C> {
    /// Creates a CFB stream seeded from `iv`.
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        let block_size = validate_block_size(&cipher)?;
        let chain = Chain::new(iv, block_size)?;
        Ok(Self { cipher, chain })
    }

    /// Underlying block cipher.
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// IV supplied at construction (or by the last [`Cfb::reset_with_iv`]).
    pub fn iv(&self) -> &[u8] {
        self.chain.iv()
    }

    /// Encrypts `plaintext`, continuing the encrypt stream.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Vec<u8> {
        apply(&self.cipher, &mut self.chain.enc, plaintext, Direction::Encrypt)
    }

    /// Decrypts `ciphertext`, continuing the decrypt stream.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Vec<u8> {
        apply(&self.cipher, &mut self.chain.dec, ciphertext, Direction::Decrypt)
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

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn apply<C: BlockCipher>(
    cipher: &C,
    fb: &mut Feedback,
    input: &[u8],
    direction: Direction,
) -> Vec<u8> {
    let block_size = fb.register.len();
    let mut output = input.to_vec();
    for byte in output.iter_mut() {
        if fb.used == block_size {
            fb.keystream.copy_from_slice(&fb.register);
            cipher.encrypt_block(&mut fb.keystream);
            fb.used = 0;
        }
        let consumed = *byte;
        *byte ^= fb.keystream[fb.used];
        // register fills with ciphertext; keystream was already derived from it
        fb.register[fb.used] = match direction {
            Direction::Encrypt => *byte,
            Direction::Decrypt => consumed,
        };
        fb.used += 1;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::xor_in_place;
    use crate::modes::testing::ToyCipher;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const KEY: [u8; 8] = *b"cfb-key!";
    const IV: [u8; 8] = *b"cfb-iv!!";

    #[test]
    fn matches_block_level_definition() {
        let cipher = ToyCipher::new(KEY);
        let plaintext = *b"0123456789abcdefXYZ";

        let mut expected = Vec::new();
        let mut prev = IV.to_vec();
        for chunk in plaintext.chunks(8) {
            let mut keystream = prev.clone();
            cipher.encrypt_block(&mut keystream);
            let mut ct = chunk.to_vec();
            xor_in_place(&mut ct, &keystream);
            expected.extend_from_slice(&ct);
            prev = ct;
        }

        let mut cfb = Cfb::new(cipher, &IV).unwrap();
        assert_eq!(cfb.encrypt(&plaintext), expected);
    }

    #[test]
    fn streaming_splits_agree_with_one_shot() {
        let mut rng = ChaCha20Rng::from_seed([31u8; 32]);
        let mut plaintext = vec![0u8; 45];
        rng.fill_bytes(&mut plaintext);

        let mut one_shot = Cfb::new(ToyCipher::new(KEY), &IV).unwrap();
        let expected = one_shot.encrypt(&plaintext);

        for split in [0usize, 3, 8, 13, 44] {
            let mut streaming = Cfb::new(ToyCipher::new(KEY), &IV).unwrap();
            let mut ct = streaming.encrypt(&plaintext[..split]);
            ct.extend(streaming.encrypt(&plaintext[split..]));
            assert_eq!(ct, expected, "split at {split}");

            let mut pt = streaming.decrypt(&ct[..split]);
            pt.extend(streaming.decrypt(&ct[split..]));
            assert_eq!(pt, plaintext);
        }
    }

    #[test]
    fn flipped_bit_corrupts_following_block() {
        let mut cfb = Cfb::new(ToyCipher::new(KEY), &IV).unwrap();
        let plaintext = [0u8; 24];
        let mut ct = cfb.encrypt(&plaintext);
        ct[0] ^= 1;
        let pt = cfb.decrypt(&ct);
        assert_eq!(pt[0], 1);
        assert_ne!(pt[8..16], plaintext[8..16]);
        assert_eq!(pt[16..], plaintext[16..]);
    }
}
