//! AES round transformations.

use crate::block::{xor_in_place, Block};
use crate::gf::double;
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    tmp[0] = state[0];
    tmp[1] = state[5];
    tmp[2] = state[10];
    tmp[3] = state[15];

    tmp[4] = state[4];
    tmp[5] = state[9];
    tmp[6] = state[14];
    tmp[7] = state[3];

    tmp[8] = state[8];
    tmp[9] = state[13];
    tmp[10] = state[2];
    tmp[11] = state[7];

    tmp[12] = state[12];
    tmp[13] = state[1];
    tmp[14] = state[6];
    tmp[15] = state[11];

    *state = tmp;
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    tmp[0] = state[0];
    tmp[1] = state[13];
    tmp[2] = state[10];
    tmp[3] = state[7];

    tmp[4] = state[4];
    tmp[5] = state[1];
    tmp[6] = state[14];
    tmp[7] = state[11];

    tmp[8] = state[8];
    tmp[9] = state[5];
    tmp[10] = state[2];
    tmp[11] = state[15];

    tmp[12] = state[12];
    tmp[13] = state[9];
    tmp[14] = state[6];
    tmp[15] = state[3];

    *state = tmp;
}

// out_i = a_i ^ e ^ 2*(a_i ^ a_{i+1}), with e the XOR of the column.
fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    let e = a0 ^ a1 ^ a2 ^ a3;
    col[0] = a0 ^ e ^ double(a0 ^ a1);
    col[1] = a1 ^ e ^ double(a1 ^ a2);
    col[2] = a2 ^ e ^ double(a2 ^ a3);
    col[3] = a3 ^ e ^ double(a3 ^ a0);
}

// {0e,0b,0d,09} = {02,03,01,01} x {05,00,04,00}: fold 4*(a0^a2) and
// 4*(a1^a3) into the column, then run the forward mix.
fn inv_mix_single_column(col: &mut [u8; 4]) {
    let u = double(double(col[0] ^ col[2]));
    let v = double(double(col[1] ^ col[3]));
    col[0] ^= u;
    col[1] ^= v;
    col[2] ^= u;
    col[3] ^= v;
    mix_single_column(col);
}

fn for_each_column(state: &mut Block, f: fn(&mut [u8; 4])) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        f(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for_each_column(state, mix_single_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for_each_column(state, inv_mix_single_column);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
