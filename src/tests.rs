//======================================================================
// Ascon Suite Test Module
//======================================================================
#![cfg(test)]

extern crate alloc;
use alloc::vec::Vec;

use ::aead::{generic_array::GenericArray, Aead, AeadInPlace, KeyInit, Payload};
use digest::{Digest, ExtendableOutput, Update, XofReader};
use hex_literal::hex;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

use crate::aead::AsconAead;
use crate::backends::permute;
use crate::consts::MAX_ROUNDS;
use crate::variant::{AeadVariant, Ascon128, Ascon128a, Ascon80pq};
use crate::{
    Ascon128Aead, Ascon128aAead, AsconHash, AsconHashA, AsconXof, AsconXofA,
};

//======================================================================
// Permutation Tests
//======================================================================

// The full permutation applied to a hash parameter word must reproduce
// the precomputed initial states of the corresponding variants.
#[test]
fn permutation_derives_hash_init_states() {
    let mut state = [0x0040_0c00_0000_0100u64, 0, 0, 0, 0];
    permute(&mut state, MAX_ROUNDS);
    assert_eq!(
        state,
        [
            0xee93_98aa_db67_f03d,
            0x8bb2_1831_c60f_1002,
            0xb48a_92db_98d5_da62,
            0x4318_9921_b8f8_e3e8,
            0x348f_a5c9_d525_e140,
        ]
    );

    let mut state = [0x0040_0c04_0000_0100u64, 0, 0, 0, 0];
    permute(&mut state, MAX_ROUNDS);
    assert_eq!(
        state,
        [
            0x0147_0194_fc65_28a6,
            0x738e_c38a_c0ad_ffa7,
            0x2ec8_e329_6c76_384c,
            0xd6f6_a54d_7f52_377d,
            0xa13c_42a2_23be_8d87,
        ]
    );

    let mut state = [0x0040_0c00_0000_0000u64, 0, 0, 0, 0];
    permute(&mut state, MAX_ROUNDS);
    assert_eq!(
        state,
        [
            0xb57e_273b_814c_d416,
            0x2b51_0425_62ae_2420,
            0x66a3_a776_8ddf_2218,
            0x5aad_0a7a_8153_650c,
            0x4f3e_0e32_5394_93b6,
        ]
    );
}

//======================================================================
// Hash Tests
//======================================================================

#[test]
fn hash_empty_known_answer() {
    let digest = AsconHash::digest(b"");
    assert_eq!(
        digest.as_slice(),
        hex!("7346bc14f036e87ae03d0997913088f5f68411434b3cf8b54fa796a80d251f91")
    );
}

#[test]
fn hasha_empty_known_answer() {
    let digest = AsconHashA::digest(b"");
    assert_eq!(
        digest.as_slice(),
        hex!("aecd027026d0675f9de7a8ad8ccf512db64b1edcf0b20c388a0c7cc617aaa2c4")
    );
}

#[test]
fn hash_is_deterministic() {
    let msg = b"same message, same digest";
    assert_eq!(AsconHash::digest(msg), AsconHash::digest(msg));
    assert_eq!(AsconHashA::digest(msg), AsconHashA::digest(msg));
    // The two variants are separated by their parameter words.
    assert_ne!(AsconHash::digest(msg), AsconHashA::digest(msg));
}

#[test]
fn hash_incremental_matches_oneshot() {
    let msg: Vec<u8> = (0..=255u8).collect();
    for split in [0usize, 1, 7, 8, 9, 63, 64, 65, 255, 256] {
        let mut hasher = AsconHash::new();
        Digest::update(&mut hasher, &msg[..split]);
        Digest::update(&mut hasher, &msg[split..]);
        assert_eq!(hasher.finalize(), AsconHash::digest(&msg));

        let mut hasher = AsconHashA::new();
        Digest::update(&mut hasher, &msg[..split]);
        Digest::update(&mut hasher, &msg[split..]);
        assert_eq!(hasher.finalize(), AsconHashA::digest(&msg));
    }
}

//======================================================================
// XOF Tests
//======================================================================

#[test]
fn xof_reader_continuation() {
    let mut hasher = AsconXof::default();
    Update::update(&mut hasher, b"arbitrary length input");
    let mut reader = hasher.finalize_xof();
    let mut first = [0u8; 16];
    let mut second = [0u8; 16];
    reader.read(&mut first);
    reader.read(&mut second);
    assert_ne!(first, second);

    // Reading 32 bytes at once must match the two 16-byte reads.
    let mut hasher = AsconXof::default();
    Update::update(&mut hasher, b"arbitrary length input");
    let mut reader = hasher.finalize_xof();
    let mut both = [0u8; 32];
    reader.read(&mut both);
    assert_eq!(&both[..16], first);
    assert_eq!(&both[16..], second);
}

#[test]
fn xofa_is_deterministic_and_separated() {
    let mut out1 = [0u8; 48];
    let mut hasher = AsconXofA::default();
    Update::update(&mut hasher, b"input");
    hasher.finalize_xof().read(&mut out1);

    let mut out2 = [0u8; 48];
    let mut hasher = AsconXofA::default();
    Update::update(&mut hasher, b"input");
    hasher.finalize_xof().read(&mut out2);
    assert_eq!(out1, out2);

    let mut xof_out = [0u8; 48];
    let mut hasher = AsconXof::default();
    Update::update(&mut hasher, b"input");
    hasher.finalize_xof().read(&mut xof_out);
    assert_ne!(out1, xof_out);
}

//======================================================================
// AEAD Tests
//======================================================================

#[test]
fn ascon128_empty_known_answer() {
    let key = hex!("000102030405060708090a0b0c0d0e0f");
    let nonce = hex!("000102030405060708090a0b0c0d0e0f");
    let cipher = Ascon128Aead::new(&key.into());

    let mut buffer = [0u8; 0];
    let tag = cipher
        .encrypt_in_place_detached(&nonce.into(), b"", &mut buffer)
        .expect("AEAD encryption failed");
    assert_eq!(tag.as_slice(), hex!("e355159f292911f794cb1432a0103a8a"));
}

#[test]
fn ascon128a_empty_known_answer() {
    let key = hex!("000102030405060708090a0b0c0d0e0f");
    let nonce = hex!("000102030405060708090a0b0c0d0e0f");
    let cipher = Ascon128aAead::new(&key.into());

    let mut buffer = [0u8; 0];
    let tag = cipher
        .encrypt_in_place_detached(&nonce.into(), b"", &mut buffer)
        .expect("AEAD encryption failed");
    assert_eq!(tag.as_slice(), hex!("7a834e6f09210957067b10fd831f0078"));
}

/// Encrypt-then-decrypt across message lengths from empty through several
/// blocks, crossed with a spread of associated-data lengths.
fn exercise_roundtrips<V: AeadVariant>(seed: u8) {
    let mut rng = ChaCha8Rng::from_seed([seed; 32]);
    let key = AsconAead::<V>::generate_key(&mut rng);
    let cipher = AsconAead::<V>::new(&key);
    let mut nonce_bytes = [0u8; 16];
    rng.fill_bytes(&mut nonce_bytes);
    let nonce = nonce_bytes.into();

    for pt_len in 0..=(3 * V::RATE + 1) {
        for ad_len in [0, 1, V::RATE - 1, V::RATE, V::RATE + 1, 2 * V::RATE] {
            let plaintext: Vec<u8> = (0..pt_len as u8).collect();
            let ad: Vec<u8> = (0..ad_len as u8).map(|b| b.wrapping_mul(3)).collect();

            let mut buffer = plaintext.clone();
            let tag = cipher
                .encrypt_in_place_detached(&nonce, &ad, &mut buffer)
                .expect("AEAD encryption failed");
            assert_eq!(buffer.len(), plaintext.len());
            if pt_len >= 8 {
                assert_ne!(buffer, plaintext, "ciphertext should not match plaintext");
            }

            cipher
                .decrypt_in_place_detached(&nonce, &ad, &mut buffer, &tag)
                .expect("AEAD decryption should succeed with correct tag");
            assert_eq!(buffer, plaintext, "decrypted text should match original");
        }
    }
}

#[test]
fn ascon128_roundtrips() {
    exercise_roundtrips::<Ascon128>(1);
}

#[test]
fn ascon128a_roundtrips() {
    exercise_roundtrips::<Ascon128a>(2);
}

#[test]
fn ascon80pq_roundtrips() {
    exercise_roundtrips::<Ascon80pq>(3);
}

#[test]
fn attached_ciphertext_roundtrip() {
    let key = [0x42; 16].into();
    let cipher = Ascon128Aead::new(&key);
    let nonce = [0x24; 16].into();

    let sealed = cipher
        .encrypt(
            &nonce,
            Payload {
                msg: b"secret message",
                aad: b"header",
            },
        )
        .expect("AEAD encryption failed");
    assert_eq!(sealed.len(), b"secret message".len() + 16);

    let opened = cipher
        .decrypt(
            &nonce,
            Payload {
                msg: &sealed,
                aad: b"header",
            },
        )
        .expect("AEAD decryption should succeed");
    assert_eq!(opened, b"secret message");
}

/// Returns a copy of `input` with the given bit flipped. The input is not
/// mutated.
fn flip_bit(input: &[u8], bit: usize) -> Vec<u8> {
    let mut out = input.to_vec();
    out[bit / 8] ^= 1 << (bit % 8);
    out
}

/// Every single-bit corruption of associated data, ciphertext or tag must
/// fail verification and leave only zeroes in the output buffer.
fn exercise_tampering<V: AeadVariant>(seed: u8) {
    let mut rng = ChaCha8Rng::from_seed([seed; 32]);
    let key = AsconAead::<V>::generate_key(&mut rng);
    let cipher = AsconAead::<V>::new(&key);
    let mut nonce_bytes = [0u8; 16];
    rng.fill_bytes(&mut nonce_bytes);
    let nonce = nonce_bytes.into();

    let mut ad = [0u8; 11];
    rng.fill_bytes(&mut ad);
    let mut plaintext = [0u8; 21];
    rng.fill_bytes(&mut plaintext);

    let mut ciphertext = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(&nonce, &ad, &mut ciphertext)
        .expect("AEAD encryption failed");

    for bit in 0..ad.len() * 8 {
        let bad_ad = flip_bit(&ad, bit);
        let mut buffer = ciphertext.clone();
        let result = cipher.decrypt_in_place_detached(&nonce, &bad_ad, &mut buffer, &tag);
        assert!(result.is_err(), "tampered associated data must be rejected");
        assert!(
            buffer.iter().all(|&b| b == 0),
            "unverified plaintext must not be released"
        );
    }

    for bit in 0..ciphertext.len() * 8 {
        let mut buffer = flip_bit(&ciphertext, bit);
        let result = cipher.decrypt_in_place_detached(&nonce, &ad, &mut buffer, &tag);
        assert!(result.is_err(), "tampered ciphertext must be rejected");
        assert!(
            buffer.iter().all(|&b| b == 0),
            "unverified plaintext must not be released"
        );
    }

    for bit in 0..tag.len() * 8 {
        let bad_tag = flip_bit(tag.as_slice(), bit);
        let mut buffer = ciphertext.clone();
        let result = cipher.decrypt_in_place_detached(
            &nonce,
            &ad,
            &mut buffer,
            GenericArray::from_slice(&bad_tag),
        );
        assert!(result.is_err(), "tampered tag must be rejected");
        assert!(
            buffer.iter().all(|&b| b == 0),
            "unverified plaintext must not be released"
        );
    }
}

#[test]
fn ascon128_rejects_tampering() {
    exercise_tampering::<Ascon128>(11);
}

#[test]
fn ascon128a_rejects_tampering() {
    exercise_tampering::<Ascon128a>(12);
}

#[test]
fn ascon80pq_rejects_tampering() {
    exercise_tampering::<Ascon80pq>(13);
}

#[test]
fn nonce_change_invalidates_tag() {
    let key = [0x07; 20].into();
    let cipher = crate::Ascon80pqAead::new(&key);

    let mut buffer = *b"post-quantum margin";
    let tag = cipher
        .encrypt_in_place_detached(&[0x01; 16].into(), b"", &mut buffer)
        .expect("AEAD encryption failed");

    let result = cipher.decrypt_in_place_detached(&[0x02; 16].into(), b"", &mut buffer, &tag);
    assert!(result.is_err(), "a different nonce must fail verification");
    assert!(buffer.iter().all(|&b| b == 0));
}
