//! Padding schemes for block-aligned modes.

use std::fmt;

use crate::error::{CipherError, Result};

/// A reversible padding scheme.
pub trait Padding: fmt::Debug + Send + Sync {
    /// Extends `data` to a multiple of `block_size`.
    ///
    /// Fails with [`CipherError::InvalidBlockSize`] when the scheme cannot
    /// encode padding for `block_size`.
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>>;

    /// Strips padding added by [`Padding::pad`], returning the message prefix.
    fn unpad<'a>(&self, data: &'a [u8], block_size: usize) -> Result<&'a [u8]>;
}

/// PKCS#7 padding: `n` bytes of value `n`, with `1 <= n <= block_size`.
///
/// The pad length is stored in one byte, so block sizes above 255 are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pkcs7;

impl Padding for Pkcs7 {
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        check_block_size(block_size)?;
        let n = block_size - (data.len() % block_size);
        let mut padded = Vec::with_capacity(data.len() + n);
        padded.extend_from_slice(data);
        padded.resize(data.len() + n, n as u8);
        Ok(padded)
    }

    fn unpad<'a>(&self, data: &'a [u8], block_size: usize) -> Result<&'a [u8]> {
        check_block_size(block_size)?;
        let v = *data.last().ok_or(CipherError::InvalidPadding)? as usize;
        if v == 0 || v > block_size || v > data.len() {
            return Err(CipherError::InvalidPadding);
        }
        let (message, tail) = data.split_at(data.len() - v);
        if tail.iter().any(|&b| b as usize != v) {
            return Err(CipherError::InvalidPadding);
        }
        Ok(message)
    }
}

fn check_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 || block_size > usize::from(u8::MAX) {
        return Err(CipherError::InvalidBlockSize);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_partial_block() {
        let padded = Pkcs7.pad(b"YELLOW SUBMARINE!!", 16).unwrap();
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[18..], &[14u8; 14]);
    }

    #[test]
    fn aligned_input_gets_full_block() {
        let padded = Pkcs7.pad(&[7u8; 16], 16).unwrap();
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[16u8; 16]);

        let padded = Pkcs7.pad(&[], 8).unwrap();
        assert_eq!(padded, vec![8u8; 8]);
    }

    #[test]
    fn unpad_strips_padding() {
        let padded = Pkcs7.pad(b"hello", 16).unwrap();
        assert_eq!(Pkcs7.unpad(&padded, 16).unwrap(), b"hello");
    }

    #[test]
    fn unpad_rejects_malformed_tails() {
        let mut bad = vec![0u8; 16];
        assert_eq!(Pkcs7.unpad(&bad, 16), Err(CipherError::InvalidPadding));

        bad[15] = 17;
        assert_eq!(Pkcs7.unpad(&bad, 16), Err(CipherError::InvalidPadding));

        bad[15] = 3;
        bad[14] = 3;
        bad[13] = 2;
        assert_eq!(Pkcs7.unpad(&bad, 16), Err(CipherError::InvalidPadding));

        assert_eq!(Pkcs7.unpad(&[4, 4, 4], 16), Err(CipherError::InvalidPadding));
        assert_eq!(Pkcs7.unpad(&[], 16), Err(CipherError::InvalidPadding));
    }

    #[test]
    fn block_sizes_beyond_one_byte_are_rejected() {
        let padded = Pkcs7.pad(&[], 255).unwrap();
        assert_eq!(padded, vec![255u8; 255]);
        assert_eq!(Pkcs7.unpad(&padded, 255).unwrap(), b"");

        assert_eq!(Pkcs7.pad(&[], 256), Err(CipherError::InvalidBlockSize));
        assert_eq!(Pkcs7.pad(b"data", 0), Err(CipherError::InvalidBlockSize));
        assert_eq!(
            Pkcs7.unpad(&[1u8; 256], 256),
            Err(CipherError::InvalidBlockSize)
        );
    }

    #[test]
    fn unpad_accepts_whole_padding_block() {
        let data = [16u8; 16];
        assert_eq!(Pkcs7.unpad(&data, 16).unwrap(), b"");
    }
}
