//! Block representation helpers.

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, laid out column-major: byte `4 * c + r` is row `r`
/// of column `c`.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
