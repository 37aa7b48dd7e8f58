use edwards25519::Error;
use edwards25519::ed25519::{PublicKey, keypair_from_seed};
use edwards25519::x25519::{
    BASEPOINT, convert_private_key, convert_public_key, exchange, public_key,
};

fn bytes32(hex_str: &str) -> [u8; 32] {
    hex::decode(hex_str).unwrap().try_into().unwrap()
}

#[test]
fn test_x25519_rfc7748_vectors() {
    let vectors = [
        (
            "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
            "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
            "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552",
        ),
        (
            "4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d",
            "e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493",
            "95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957",
        ),
    ];

    for (scalar, u, expected) in vectors {
        assert_eq!(exchange(&bytes32(scalar), &bytes32(u)), bytes32(expected));
    }
}

#[test]
fn test_x25519_iterated() {
    let mut k = BASEPOINT;
    let mut u = BASEPOINT;

    for i in 1..=1000 {
        let next = exchange(&k, &u);
        u = k;
        k = next;

        if i == 1 {
            assert_eq!(
                k,
                bytes32("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079")
            );
        }
    }

    assert_eq!(
        k,
        bytes32("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51")
    );
}

#[test]
fn test_x25519_key_exchange() {
    let alice_private = bytes32("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
    let bob_private = bytes32("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");

    let alice_public = public_key(&alice_private);
    let bob_public = public_key(&bob_private);

    assert_eq!(
        alice_public,
        bytes32("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a")
    );
    assert_eq!(
        bob_public,
        bytes32("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f")
    );

    let alice_shared = exchange(&alice_private, &bob_public);
    let bob_shared = exchange(&bob_private, &alice_public);

    assert_eq!(alice_shared, bob_shared);
    assert_eq!(
        alice_shared,
        bytes32("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742")
    );
}

#[test]
fn test_x25519_ignores_high_bit_of_u() {
    let scalar = [0x5a; 32];
    let u = bytes32("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");

    let mut high = u;
    high[31] |= 0x80;

    assert_eq!(exchange(&scalar, &u), exchange(&scalar, &high));
}

#[test]
fn test_x25519_convert_ed25519_keys() {
    let seed = bytes32("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let (public, private) = keypair_from_seed(&seed);

    let converted_public = convert_public_key(&public).unwrap();
    let converted_private = convert_private_key(&private);

    assert_eq!(
        converted_public,
        bytes32("d85e07ec22b0ad881537c2f44d662d1a143cf830c57aca4305d85c7a90f6b62e")
    );
    assert_eq!(public_key(&converted_private), converted_public);
}

#[test]
fn test_x25519_converted_keys_agree() {
    let (alice_public, alice_private) = keypair_from_seed(&[1u8; 32]);
    let (bob_public, bob_private) = keypair_from_seed(&[2u8; 32]);

    let alice_shared = exchange(
        &convert_private_key(&alice_private),
        &convert_public_key(&bob_public).unwrap(),
    );
    let bob_shared = exchange(
        &convert_private_key(&bob_private),
        &convert_public_key(&alice_public).unwrap(),
    );

    assert_eq!(alice_shared, bob_shared);
    assert_ne!(alice_shared, [0u8; 32]);
}

#[test]
fn test_x25519_convert_rejects_invalid_key() {
    assert_eq!(
        convert_public_key(&PublicKey::from_bytes([0xff; 32])),
        Err(Error::InvalidEncoding)
    );
}
