//! Known-answer vectors run by `aesmode check`.

use aes_core::{new_cipher, Aes, CipherOptions, Mode};
use anyhow::{ensure, Context, Result};

/// FIPS-197 appendix C: (key, plaintext, ciphertext).
const FIPS_197: [(&str, &str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "00112233445566778899aabbccddeeff",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "00112233445566778899aabbccddeeff",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

const SP_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const SP_IV: &str = "000102030405060708090a0b0c0d0e0f";
const SP_PLAIN: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51\
                        30c81c46a35ce411e5fbc1191a0a52eff69f2445df4f9b17ad2b417be66c3710";

/// NIST SP 800-38A appendix F, AES-128.
const SP_800_38A: [(Mode, &str); 4] = [
    (
        Mode::Ecb,
        "3ad77bb40d7a3660a89ecaf32466ef97f5d3d58503b9699de785895a96fdbaaf\
         43b1cd7f598ece23881b00e3ed0306887b0c785e27e8ad3f8223207104725dd4",
    ),
    (
        Mode::Cbc,
        "7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2\
         73bed6b8e3c1743b7116e69e222295163ff1caa1681fac09120eca307586e1a7",
    ),
    (
        Mode::Cfb,
        "3b3fd92eb72dad20333449f8e83cfb4ac8a64537a0b3a93fcde3cdad9f1ce58b\
         26751f67a3cbb140b1808cf187a4f4dfc04b05357c5d1c0eeac4c66f9ff7f2e6",
    ),
    (
        Mode::Ofb,
        "3b3fd92eb72dad20333449f8e83cfb4a7789508d16918f03f53c52dac54ed825\
         9740051e9c5fecf64344f7a82260edcc304c6528f659c77866a510d9c1d6ae5e",
    ),
];

/// Outcome of one vector.
pub struct Outcome {
    pub name: String,
    pub passed: bool,
}

/// Runs every built-in vector.
pub fn run_all() -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::new();

    for (key, plain, cipher) in FIPS_197 {
        let key = hex::decode(key)?;
        let aes = Aes::new(&key).context("FIPS-197 key")?;
        let block: [u8; 16] = hex::decode(plain)?
            .try_into()
            .map_err(|_| anyhow::anyhow!("plaintext vector is not one block"))?;
        let encrypted = aes.encrypt(&block);
        let passed = hex::encode(encrypted) == cipher && aes.decrypt(&encrypted) == block;
        outcomes.push(Outcome {
            name: format!("FIPS-197 AES-{}", key.len() * 8),
            passed,
        });
    }

    let key = hex::decode(SP_KEY)?;
    let iv = hex::decode(SP_IV)?;
    let plaintext = hex::decode(SP_PLAIN)?;
    for (mode, expected) in SP_800_38A {
        let options = CipherOptions::new(mode).with_iv(iv.clone());
        let mut cipher = new_cipher(&key, options).context("SP 800-38A options")?;
        let ciphertext = cipher.encrypt(&plaintext)?;
        ensure!(ciphertext.len() >= plaintext.len(), "short {mode} output");
        let passed = hex::encode(&ciphertext[..plaintext.len()]) == expected
            && cipher.decrypt(&ciphertext)? == plaintext;
        outcomes.push(Outcome {
            name: format!("SP 800-38A AES-128-{mode}"),
            passed,
        });
    }

    Ok(outcomes)
}
