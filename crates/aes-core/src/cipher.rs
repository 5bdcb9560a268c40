//! AES key schedule and block encryption/decryption.

use crate::block::{Block, BLOCK_SIZE};
use crate::gf::double;
use crate::key::{AesKey, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

/// Round constants; entry 0 is never used.
pub const RCON: [u8; 11] = rcon();

const fn rcon() -> [u8; 11] {
    let mut table = [0u8; 11];
    table[1] = 0x01;
    let mut i = 2;
    while i < table.len() {
        table[i] = double(table[i - 1]);
        i += 1;
    }
    table
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a key into `Nr + 1` round keys.
pub fn expand_key(key: &AesKey) -> RoundKeys {
    let nk = key.size().nk();
    let total_words = 4 * (key.size().rounds() + 1);

    let mut w = Vec::with_capacity(total_words);
    for chunk in key.as_bytes().chunks_exact(4) {
        w.push(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w.push(w[i - nk] ^ temp);
    }

    let round_keys = w
        .chunks_exact(4)
        .map(|words| {
            let mut round_key = [0u8; BLOCK_SIZE];
            for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                dst.copy_from_slice(&word.to_be_bytes());
            }
            round_key
        })
        .collect();

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(rounds));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}
