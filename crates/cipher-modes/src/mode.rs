//! Mode selector.

use std::fmt;
use std::str::FromStr;

use crate::error::CipherError;

/// Supported modes of operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic Codebook.
    #[default]
    Ecb,
    /// Cipher Block Chaining.
    Cbc,
    /// Cipher Feedback with full-block feedback.
    Cfb,
    /// Output Feedback.
    Ofb,
}

impl Mode {
    /// All supported modes.
    pub const ALL: [Mode; 4] = [Mode::Ecb, Mode::Cbc, Mode::Cfb, Mode::Ofb];

    /// Whether the mode needs an IV.
    pub fn requires_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }

    /// Whether ciphertext length is tied to the block size (and padding applies).
    pub fn is_block_aligned(self) -> bool {
        matches!(self, Mode::Ecb | Mode::Cbc)
    }

    /// Upper-case name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Cfb => "CFB",
            Mode::Ofb => "OFB",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            "cfb" => Ok(Mode::Cfb),
            "ofb" => Ok(Mode::Ofb),
            _ => Err(CipherError::UnsupportedMode(s.to_string())),
        }
    }
}
