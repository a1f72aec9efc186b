use hex_literal::hex;
use spongewrap::{AesPermutation, Error, Pad10Star1, SpongeAead, SpongeHash};

const HEADER: &str = "Geheimer Text für Nicole";

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn hash(data: &[u8]) -> Vec<u8> {
    let mut h = SpongeHash::new(AesPermutation::default(), 10, Pad10Star1);
    h.final_absorb(data, None);
    h.squeeze(16)
}

fn aead() -> SpongeAead<AesPermutation, Pad10Star1> {
    SpongeAead::new(AesPermutation::default(), 10, 8, 16, Pad10Star1)
}

#[test]
fn hash_known_answers() {
    init_logging();
    assert_eq!(hash(b"Test 1234"), hex!("8d3d39a81aa223e21c49db6eb3c0b29c"));
    assert_eq!(hash(b"Test 1235"), hex!("19850ea616538592e302aa436ce22388"));
    assert_eq!(hash(b"Test 12345"), hex!("51daa565a0820002b928b230b2af2ff6"));
}

#[test]
fn aead_known_answers() {
    init_logging();
    let aead = aead();
    let cases: [(&[u8], &[u8], [u8; 16]); 3] = [
        (
            b"Das Passwort ist 1234",
            &hex!("6ab8f63402d2d9ff4e85077c2a85bc5f6cf0bf0d36"),
            hex!("35aa49719bdfd6187e5a072d021db0dc"),
        ),
        (
            b"Das Passwort ist 1235",
            &hex!("6ab8f63402d2d9ff4e85077c2a85bc5f6cf0bf0d37"),
            hex!("0641cc61be01709c4d1fa1f113797fff"),
        ),
        (
            b"Das Passwort ist 12345",
            &hex!("6ab8f63402d2d9ff4e85077c2a85bc5f6cf0bf0d36e2"),
            hex!("75e659680e0f3f6c39de346f35fc3f6f"),
        ),
    ];
    for (data, expected_ciphertext, expected_tag) in cases {
        let (ciphertext, tag) = aead.encrypt_and_tag(b"Test 1234", HEADER.as_bytes(), data);
        assert_eq!(ciphertext, expected_ciphertext);
        assert_eq!(tag, expected_tag);
        assert_eq!(
            aead.decrypt_and_authenticate(b"Test 1234", HEADER.as_bytes(), &ciphertext, &tag),
            Ok(data.to_vec())
        );
    }
}

#[test]
fn tampering_is_detected() {
    init_logging();
    let aead = aead();
    let (mut ciphertext, tag) =
        aead.encrypt_and_tag(b"Test 1234", HEADER.as_bytes(), b"Das Passwort ist 1234");
    assert_eq!(
        aead.decrypt_and_authenticate(b"Test 1235", HEADER.as_bytes(), &ciphertext, &tag),
        Err(Error::AuthenticationFailed)
    );
    assert_eq!(
        aead.decrypt_and_authenticate(b"Test 1234", b"Geheimer Text", &ciphertext, &tag),
        Err(Error::AuthenticationFailed)
    );
    ciphertext[20] ^= 1;
    assert_eq!(
        aead.decrypt_and_authenticate(b"Test 1234", HEADER.as_bytes(), &ciphertext, &tag),
        Err(Error::AuthenticationFailed)
    );
}

#[test]
fn other_keys_give_other_permutations() {
    let mut h = SpongeHash::new(AesPermutation::new(&[0u8; 32]), 10, Pad10Star1);
    h.final_absorb(b"Test 1234", None);
    assert_ne!(h.squeeze(16), hash(b"Test 1234"));
}
