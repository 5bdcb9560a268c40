//! Modes of operation and the mode-dispatching facade.

pub mod cbc;
pub mod cfb;
pub mod ecb;
pub mod ofb;

pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ecb::Ecb;
pub use ofb::Ofb;

use crate::cipher::BlockCipher;
use crate::error::{CipherError, Result};
use crate::mode::Mode;
use crate::options::CipherOptions;

/// Checks that `iv` is exactly one block long.
pub fn validate_iv(iv: &[u8], block_size: usize) -> Result<()> {
    if iv.len() != block_size {
        return Err(CipherError::InvalidIvLength {
            expected: block_size,
            actual: iv.len(),
        });
    }
    Ok(())
}

pub(crate) fn validate_block_size<C: BlockCipher>(cipher: &C) -> Result<usize> {
    match cipher.block_size() {
        0 => Err(CipherError::InvalidBlockSize),
        n => Ok(n),
    }
}

/// One direction's feedback state.
///
/// `keystream[used..]` is the unconsumed tail of the current keystream block;
/// `used == block size` means a fresh block must be generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Feedback {
    pub(crate) register: Vec<u8>,
    pub(crate) keystream: Vec<u8>,
    pub(crate) used: usize,
}

impl Feedback {
    fn new(iv: &[u8]) -> Self {
        Self {
            register: iv.to_vec(),
            keystream: vec![0u8; iv.len()],
            used: iv.len(),
        }
    }
}

/// Encrypt- and decrypt-direction registers seeded from one IV.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Chain {
    iv: Vec<u8>,
    pub(crate) enc: Feedback,
    pub(crate) dec: Feedback,
}

impl Chain {
    pub(crate) fn new(iv: &[u8], block_size: usize) -> Result<Self> {
        validate_iv(iv, block_size)?;
        Ok(Self {
            iv: iv.to_vec(),
            enc: Feedback::new(iv),
            dec: Feedback::new(iv),
        })
    }

    pub(crate) fn iv(&self) -> &[u8] {
        &self.iv
    }

    pub(crate) fn reset(&mut self) {
        self.enc = Feedback::new(&self.iv);
        self.dec = Feedback::new(&self.iv);
    }

    pub(crate) fn reset_with_iv(&mut self, iv: &[u8]) -> Result<()> {
        *self = Self::new(iv, self.iv.len())?;
        Ok(())
    }
}

/// A block cipher bound to one mode of operation.
///
/// Built from [`CipherOptions`]; dispatches `encrypt`/`decrypt` to the
/// selected mode. Chaining modes keep separate encrypt and decrypt
/// registers, so a fresh instance round-trips its own output.
#[derive(Debug)]
pub enum ModeCipher<C> {
    /// Electronic Codebook.
    Ecb(Ecb<C>),
    /// Cipher Block Chaining.
    Cbc(Cbc<C>),
    /// Cipher Feedback.
    Cfb(Cfb<C>),
    /// Output Feedback.
    Ofb(Ofb<C>),
}

impl<C: BlockCipher> ModeCipher<C> {
    /// Binds `cipher` to the mode, IV and padding named in `options`.
    pub fn new(cipher: C, options: CipherOptions) -> Result<Self> {
        let CipherOptions { mode, iv, padding } = options;
        let required_iv = |iv: Option<Vec<u8>>| iv.ok_or(CipherError::MissingIv { mode });
        Ok(match mode {
            Mode::Ecb => Self::Ecb(Ecb::with_padding(cipher, padding)?),
            Mode::Cbc => Self::Cbc(Cbc::with_padding(cipher, &required_iv(iv)?, padding)?),
            Mode::Cfb => Self::Cfb(Cfb::new(cipher, &required_iv(iv)?)?),
            Mode::Ofb => Self::Ofb(Ofb::new(cipher, &required_iv(iv)?)?),
        })
    }

    /// Selected mode.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Ecb(_) => Mode::Ecb,
            Self::Cbc(_) => Mode::Cbc,
            Self::Cfb(_) => Mode::Cfb,
            Self::Ofb(_) => Mode::Ofb,
        }
    }

    /// Underlying block cipher.
    pub fn cipher(&self) -> &C {
        match self {
            Self::Ecb(m) => m.cipher(),
            Self::Cbc(m) => m.cipher(),
            Self::Cfb(m) => m.cipher(),
            Self::Ofb(m) => m.cipher(),
        }
    }

    /// Block size of the underlying cipher.
    pub fn block_size(&self) -> usize {
        self.cipher().block_size()
    }

    /// Encrypts a whole message.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Ecb(m) => m.encrypt(plaintext),
            Self::Cbc(m) => m.encrypt(plaintext),
            Self::Cfb(m) => Ok(m.encrypt(plaintext)),
            Self::Ofb(m) => Ok(m.encrypt(plaintext)),
        }
    }

    /// Decrypts a whole message.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Ecb(m) => m.decrypt(ciphertext),
            Self::Cbc(m) => m.decrypt(ciphertext),
            Self::Cfb(m) => Ok(m.decrypt(ciphertext)),
            Self::Ofb(m) => Ok(m.decrypt(ciphertext)),
        }
    }

    /// Rewinds feedback registers to the construction IV. No-op for ECB.
    pub fn reset(&mut self) {
        match self {
            Self::Ecb(_) => {}
            Self::Cbc(m) => m.reset(),
            Self::Cfb(m) => m.reset(),
            Self::Ofb(m) => m.reset(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::cipher::BlockCipher;

    /// Toy 8-byte block cipher; a stand-in for a second cipher family.
    #[derive(Clone, Debug)]
    pub(crate) struct ToyCipher {
        key: [u8; 8],
    }

    impl ToyCipher {
        pub(crate) fn new(key: [u8; 8]) -> Self {
            Self { key }
        }
    }

    impl BlockCipher for ToyCipher {
        fn block_size(&self) -> usize {
            8
        }

        fn encrypt_block(&self, block: &mut [u8]) {
            for (b, k) in block.iter_mut().zip(self.key.iter()) {
                *b = (*b ^ *k).rotate_left(3);
            }
            block.rotate_left(1);
        }

        fn decrypt_block(&self, block: &mut [u8]) {
            block.rotate_right(1);
            for (b, k) in block.iter_mut().zip(self.key.iter()) {
                *b = b.rotate_right(3) ^ *k;
            }
        }
    }
}
