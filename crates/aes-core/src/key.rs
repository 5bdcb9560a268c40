//! Key types for AES-128, AES-192 and AES-256.

use cipher_modes::CipherError;

use crate::block::Block;

/// Supported key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 16-byte key, 10 rounds.
    Aes128,
    /// 24-byte key, 12 rounds.
    Aes192,
    /// 32-byte key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a key length in bytes to its size class.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Key length in bytes.
    pub fn byte_len(self) -> usize {
        self.nk() * 4
    }

    /// Key length in 32-bit words (`Nk`).
    pub fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr = Nk + 6`).
    pub fn rounds(self) -> usize {
        self.nk() + 6
    }

    /// Key length in bits.
    pub fn bits(self) -> usize {
        self.byte_len() * 8
    }
}

/// AES key of an allowed length.
#[derive(Clone, PartialEq, Eq)]
pub struct AesKey {
    bytes: Vec<u8>,
    size: KeySize,
}

impl AesKey {
    /// Validates and copies `bytes` into a key.
    pub fn new(bytes: &[u8]) -> Result<Self, CipherError> {
        let size = KeySize::from_len(bytes.len()).ok_or(CipherError::InvalidKeyLength {
            actual: bytes.len(),
        })?;
        Ok(Self {
            bytes: bytes.to_vec(),
            size,
        })
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size class of the key.
    pub fn size(&self) -> KeySize {
        self.size
    }
}

// Key material stays out of debug output.
impl std::fmt::Debug for AesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesKey").field("size", &self.size).finish()
    }
}

impl TryFrom<&[u8]> for AesKey {
    type Error = CipherError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! impl_from_array {
    ($($n:literal => $size:ident),*) => {$(
        impl From<[u8; $n]> for AesKey {
            fn from(value: [u8; $n]) -> Self {
                Self {
                    bytes: value.to_vec(),
                    size: KeySize::$size,
                }
            }
        }
    )*};
}

impl_from_array!(16 => Aes128, 24 => Aes192, 32 => Aes256);

/// Expanded round keys: `Nr + 1` blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub Vec<Block>);

impl RoundKeys {
    /// Returns the round key at the requested index (`0..=Nr`).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Number of rounds (`Nr`).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.0.len() - 1
    }

    /// Schedule as one contiguous byte string of `16 * (Nr + 1)` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.concat()
    }
}
