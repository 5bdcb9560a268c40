//! Generic block cipher capability.

/// A keyed permutation over fixed-size blocks.
///
/// Implementors must accept slices of exactly [`BlockCipher::block_size`]
/// bytes; the mode layer never passes anything else.
pub trait BlockCipher {
    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Encrypts one block in place.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `block.len() != self.block_size()`.
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypts one block in place.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `block.len() != self.block_size()`.
    fn decrypt_block(&self, block: &mut [u8]);
}

impl<C: BlockCipher + ?Sized> BlockCipher for &C {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        (**self).decrypt_block(block)
    }
}

/// XORs `rhs` into `dst`, stopping at the shorter of the two.
#[inline]
pub(crate) fn xor_in_place(dst: &mut [u8], rhs: &[u8]) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
