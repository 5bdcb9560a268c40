//! GF(2^8) arithmetic modulo the Rijndael polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial.
const REDUCTION: u8 = 0x1b;

/// Multiplies by `x` (the `xtime` operation).
#[inline]
pub const fn double(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// General field multiplication by shift-and-add.
///
/// ```rust
/// use aes_core::{double, mul};
///
/// assert_eq!(mul(0x57, 0x83), 0xc1);
/// assert_eq!(mul(0x57, 0x02), double(0x57));
/// ```
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = double(a);
        b >>= 1;
    }
    product
}
