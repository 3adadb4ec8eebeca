//! Encrypts two blocks under one key and decrypts them back.

use aes128_core::{encrypt, Aes128, Aes128Key};

fn main() {
    let key = Aes128Key::from(*b"an example key!!");
    let cipher = Aes128::new(&key);

    let first = *b"first block here";
    let second = *b"second blockhere";

    let ct_first = cipher.encrypt_block(&first);
    let ct_second = cipher.encrypt_block(&second);
    assert_ne!(ct_first, ct_second);
    assert_eq!(encrypt(&first, &key.0), Ok(ct_first));

    assert_eq!(cipher.decrypt_block(&ct_first), first);
    assert_eq!(cipher.decrypt_block(&ct_second), second);

    println!("example succeeded; both blocks round-trip");
}
