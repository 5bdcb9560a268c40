//! AES as a [`BlockCipher`] and the message-level constructor.

use cipher_modes::{BlockCipher, CipherOptions, ModeCipher, Result};

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::key::{AesKey, KeySize, RoundKeys};

/// AES with an expanded key schedule.
///
/// The schedule is computed once in [`Aes::new`] and never changes, so one
/// instance can be shared for reads across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes {
    size: KeySize,
    round_keys: RoundKeys,
}

impl Aes {
    /// Validates a 16, 24 or 32 byte key and expands it.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self::with_key(&AesKey::new(key)?))
    }

    /// Expands an already validated key.
    pub fn with_key(key: &AesKey) -> Self {
        Self {
            size: key.size(),
            round_keys: expand_key(key),
        }
    }

    /// Key size class.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Expanded key schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block, leaving the input untouched.
    pub fn encrypt(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block, leaving the input untouched.
    pub fn decrypt(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}

fn as_block(block: &mut [u8]) -> &mut Block {
    let len = block.len();
    block
        .try_into()
        .unwrap_or_else(|_| panic!("AES operates on {BLOCK_SIZE}-byte blocks, got {len}"))
}

/// # Panics
///
/// `encrypt_block` and `decrypt_block` panic unless the slice is exactly
/// [`BLOCK_SIZE`] bytes long.
impl BlockCipher for Aes {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        let block = as_block(block);
        *block = self.encrypt(block);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let block = as_block(block);
        *block = self.decrypt(block);
    }
}

/// Builds an AES cipher bound to the mode, IV and padding in `options`.
///
/// Key-length and IV errors surface here rather than at first use.
pub fn new_cipher(key: &[u8], options: CipherOptions) -> Result<ModeCipher<Aes>> {
    ModeCipher::new(Aes::new(key)?, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipher_modes::{CipherError, Mode};
    use hex_literal::hex;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn one_to_sixteen() -> [u8; 16] {
        std::array::from_fn(|i| i as u8 + 1)
    }

    // NIST SP 800-38A, appendix F
    const SP_KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
    const SP_IV: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
    const SP_PLAIN: [u8; 64] = hex!(
        "6bc1bee22e409f96e93d7e117393172a"
        "ae2d8a571e03ac9c9eb76fac45af8e51"
        "30c81c46a35ce411e5fbc1191a0a52ef"
        "f69f2445df4f9b17ad2b417be66c3710"
    );

    fn sp_cipher(mode: Mode) -> ModeCipher<Aes> {
        let options = CipherOptions::new(mode);
        let options = if mode.requires_iv() {
            options.with_iv(SP_IV)
        } else {
            options
        };
        new_cipher(&SP_KEY, options).unwrap()
    }

    #[test]
    fn ecb_scenario_blocks_repeat() {
        let key = one_to_sixteen();
        let plaintext = [one_to_sixteen(), one_to_sixteen()].concat();
        let mut cipher = new_cipher(&key, CipherOptions::default()).unwrap();
        let ct = cipher.encrypt(&plaintext).unwrap();

        let expected = hex!("34c33b7f14fd53dcea25e01a02e16727");
        assert_eq!(ct.len(), 48);
        assert_eq!(ct[..16], expected);
        assert_eq!(ct[16..32], expected);
        // trailing block is the encryption of sixteen 0x10 padding bytes
        assert_eq!(ct[32..], hex!("6cc00a66d2ad83ffd76e9a2bcad89a01"));
        assert_eq!(cipher.decrypt(&ct).unwrap(), plaintext);
    }

    #[test]
    fn seventeen_byte_key_is_rejected() {
        let err = new_cipher(&[0u8; 17], CipherOptions::default()).unwrap_err();
        assert_eq!(err, CipherError::InvalidKeyLength { actual: 17 });
    }

    #[test]
    fn cbc_round_trips_any_plaintext() {
        let mut rng = ChaCha20Rng::from_seed([40u8; 32]);
        let iv = one_to_sixteen();
        for len in [0usize, 1, 15, 16, 17, 100, 256] {
            let mut plaintext = vec![0u8; len];
            rng.fill_bytes(&mut plaintext);
            let mut cipher =
                new_cipher(&one_to_sixteen(), CipherOptions::new(Mode::Cbc).with_iv(iv)).unwrap();
            let ct = cipher.encrypt(&plaintext).unwrap();
            assert_eq!(ct.len() % 16, 0);
            assert_eq!(cipher.decrypt(&ct).unwrap(), plaintext);
        }
    }

    #[test]
    fn stream_modes_round_trip_zero_message() {
        let key = one_to_sixteen();
        let plaintext = [0u8; 32];
        // with a zero IV and zero plaintext CFB and OFB share a keystream
        let expected = hex!("dbf184112eb9111659712bafcff2ab24bc9b8ffe58d9408971469eeebed66f71");
        for mode in [Mode::Cfb, Mode::Ofb] {
            let mut cipher =
                new_cipher(&key, CipherOptions::new(mode).with_iv([0u8; 16])).unwrap();
            let ct = cipher.encrypt(&plaintext).unwrap();
            assert_eq!(ct, expected);
            assert_eq!(cipher.decrypt(&ct).unwrap(), plaintext);
        }
    }

    #[test]
    fn block_aligned_modes_reject_seventeen_byte_ciphertext() {
        for mode in [Mode::Ecb, Mode::Cbc] {
            let mut cipher = sp_cipher(mode);
            assert_eq!(
                cipher.decrypt(&[0u8; 17]),
                Err(CipherError::InvalidInputLength {
                    length: 17,
                    block_size: 16
                })
            );
        }
    }

    #[test]
    fn sp800_38a_vectors() {
        let cases = [
            (
                Mode::Ecb,
                hex!(
                    "3ad77bb40d7a3660a89ecaf32466ef97"
                    "f5d3d58503b9699de785895a96fdbaaf"
                    "43b1cd7f598ece23881b00e3ed030688"
                    "7b0c785e27e8ad3f8223207104725dd4"
                ),
            ),
            (
                Mode::Cbc,
                hex!(
                    "7649abac8119b246cee98e9b12e9197d"
                    "5086cb9b507219ee95db113a917678b2"
                    "73bed6b8e3c1743b7116e69e22229516"
                    "3ff1caa1681fac09120eca307586e1a7"
                ),
            ),
            (
                Mode::Cfb,
                hex!(
                    "3b3fd92eb72dad20333449f8e83cfb4a"
                    "c8a64537a0b3a93fcde3cdad9f1ce58b"
                    "26751f67a3cbb140b1808cf187a4f4df"
                    "c04b05357c5d1c0eeac4c66f9ff7f2e6"
                ),
            ),
            (
                Mode::Ofb,
                hex!(
                    "3b3fd92eb72dad20333449f8e83cfb4a"
                    "7789508d16918f03f53c52dac54ed825"
                    "9740051e9c5fecf64344f7a82260edcc"
                    "304c6528f659c77866a510d9c1d6ae5e"
                ),
            ),
        ];
        for (mode, expected) in cases {
            let mut cipher = sp_cipher(mode);
            let ct = cipher.encrypt(&SP_PLAIN).unwrap();
            // padded modes append one extra block
            assert_eq!(ct[..64], expected, "{mode}");
            assert_eq!(cipher.decrypt(&ct).unwrap(), SP_PLAIN, "{mode}");
        }
    }

    #[test]
    fn stream_modes_truncate_final_segment() {
        for (mode, expected) in [
            (
                Mode::Cfb,
                hex!("3b3fd92eb72dad20333449f8e83cfb4ac8a64537a0b3a93fcde3cdad9f1ce58b26751f67a3"),
            ),
            (
                Mode::Ofb,
                hex!("3b3fd92eb72dad20333449f8e83cfb4a7789508d16918f03f53c52dac54ed8259740051e9c"),
            ),
        ] {
            let mut cipher = sp_cipher(mode);
            let ct = cipher.encrypt(&SP_PLAIN[..37]).unwrap();
            assert_eq!(ct, expected, "{mode}");
            assert_eq!(cipher.decrypt(&ct).unwrap(), SP_PLAIN[..37], "{mode}");
        }
    }

    #[test]
    fn cbc_matches_reference_padded_message() {
        let mut cipher = new_cipher(
            &[0x42; 16],
            CipherOptions::new(Mode::Cbc).with_iv([0x24; 16]),
        )
        .unwrap();
        let ct = cipher.encrypt(b"hello world! this is my plaintext.").unwrap();
        assert_eq!(
            ct,
            hex!(
                "c7fe247ef97b21f07cbdd26cb5d346bf"
                "d27867cb00d9486723e159978fb9a5f9"
                "14cfb228a710de4171e396e7b6cf859e"
            )
        );
    }

    #[test]
    fn cbc_same_block_differs_by_position() {
        let mut cipher = sp_cipher(Mode::Cbc);
        let block = [0x11u8; 16];
        let ct = cipher.encrypt(&[block, block].concat()).unwrap();
        assert_ne!(ct[..16], ct[16..32]);
    }

    #[test]
    fn all_modes_round_trip_random_lengths() {
        let mut rng = ChaCha20Rng::from_seed([41u8; 32]);
        for key_len in [16usize, 24, 32] {
            let mut key = vec![0u8; key_len];
            rng.fill_bytes(&mut key);
            for mode in Mode::ALL {
                for _ in 0..8 {
                    let len = (rng.next_u32() % 200) as usize;
                    let mut plaintext = vec![0u8; len];
                    let mut iv = [0u8; 16];
                    rng.fill_bytes(&mut plaintext);
                    rng.fill_bytes(&mut iv);
                    let mut cipher =
                        new_cipher(&key, CipherOptions::new(mode).with_iv(iv)).unwrap();
                    let ct = cipher.encrypt(&plaintext).unwrap();
                    assert_eq!(cipher.decrypt(&ct).unwrap(), plaintext, "{mode} {key_len}");
                }
            }
        }
    }

    #[test]
    fn block_cipher_capability_preserves_input_copy() {
        let aes = Aes::new(&SP_KEY).unwrap();
        let block = [0x33u8; 16];
        let ct = aes.encrypt(&block);
        assert_eq!(block, [0x33u8; 16]);

        let mut in_place = block;
        aes.encrypt_block(&mut in_place);
        assert_eq!(in_place, ct);
        aes.decrypt_block(&mut in_place);
        assert_eq!(in_place, block);
        assert_eq!(aes.block_size(), 16);
        assert_eq!(aes.key_size(), KeySize::Aes128);
    }

    #[test]
    #[should_panic(expected = "16-byte blocks, got 15")]
    fn short_slice_breaks_the_block_contract() {
        let aes = Aes::new(&SP_KEY).unwrap();
        aes.encrypt_block(&mut [0u8; 15]);
    }

    #[test]
    fn shared_schedule_across_threads() {
        let aes = std::sync::Arc::new(Aes::new(&SP_KEY).unwrap());
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let aes = aes.clone();
                std::thread::spawn(move || aes.decrypt(&aes.encrypt(&[i; 16])) == [i; 16])
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
