//! Encrypts one message under every mode and checks it decrypts back.

use aes_core::{new_cipher, CipherOptions, Mode};

fn main() {
    // Deterministic inputs for reproducibility in the example.
    let key: [u8; 16] = std::array::from_fn(|i| i as u8 + 1);
    let iv = [0u8; 16];
    let message = b"first block here and a ragged tail";

    for mode in Mode::ALL {
        let options = CipherOptions::new(mode).with_iv(iv);
        let mut cipher = new_cipher(&key, options).expect("valid key and IV");
        let ciphertext = cipher.encrypt(message).expect("encrypt");
        let plaintext = cipher.decrypt(&ciphertext).expect("decrypt");
        assert_eq!(&plaintext, message);
        println!("{mode}: {} bytes -> {} bytes", message.len(), ciphertext.len());
    }

    println!("example succeeded; every mode round-trips");
}
