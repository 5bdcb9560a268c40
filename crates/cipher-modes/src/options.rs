//! Construction options for [`ModeCipher`](crate::ModeCipher).

use crate::mode::Mode;
use crate::padding::{Padding, Pkcs7};

/// Mode, IV and padding selection.
///
/// Defaults to ECB with no IV and PKCS#7 padding. The IV is ignored by ECB
/// and required, one block long, by every other mode.
#[derive(Debug)]
pub struct CipherOptions {
    /// Mode of operation.
    pub mode: Mode,
    /// Initialization vector.
    pub iv: Option<Vec<u8>>,
    /// Padding scheme for ECB and CBC.
    pub padding: Box<dyn Padding>,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            iv: None,
            padding: Box::new(Pkcs7),
        }
    }
}

impl CipherOptions {
    /// Options for `mode` with every other field defaulted.
    pub fn new(mode: Mode) -> Self {
        Self::default().with_mode(mode)
    }

    /// Selects the mode of operation.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the IV.
    pub fn with_iv(mut self, iv: impl Into<Vec<u8>>) -> Self {
        self.iv = Some(iv.into());
        self
    }

    /// Replaces the padding scheme.
    pub fn with_padding(mut self, padding: impl Padding + 'static) -> Self {
        self.padding = Box::new(padding);
        self
    }
}
