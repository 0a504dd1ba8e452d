//======================================================================
// src/aead.rs
// Ascon AEAD mode.
//
// Implements the duplex sponge construction shared by Ascon-128,
// Ascon-128a and Ascon-80pq. Decryption mirrors the encryption pass
// exactly (ciphertext is written back into the rate), so the state
// evolves identically in both directions and the recomputed tag can be
// compared against the supplied one in constant time.
//======================================================================

use crate::backends;
use crate::consts::{STATE_WORDS, TAG_SIZE};
use crate::variant::AeadVariant;
use ::aead::{
    consts::{U0, U16},
    generic_array::GenericArray,
    AeadCore, AeadInPlace, Error, Key, KeyInit, KeySizeUser, Nonce, Tag,
};
use core::marker::PhantomData;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Ascon authenticated cipher, generic over the parameter variant.
///
/// The key is retained because the finalization phase re-injects it; it
/// is zeroized when the cipher is dropped.
#[derive(Clone)]
pub struct AsconAead<V: AeadVariant> {
    key: Key<Self>,
    _variant: PhantomData<V>,
}

impl<V: AeadVariant> KeySizeUser for AsconAead<V> {
    type KeySize = V::KeySize;
}

impl<V: AeadVariant> KeyInit for AsconAead<V> {
    fn new(key: &Key<Self>) -> Self {
        Self {
            key: key.clone(),
            _variant: PhantomData,
        }
    }
}

impl<V: AeadVariant> Drop for AsconAead<V> {
    fn drop(&mut self) {
        self.key.as_mut_slice().zeroize();
    }
}

impl<V: AeadVariant> ZeroizeOnDrop for AsconAead<V> {}

impl<V: AeadVariant> AeadCore for AsconAead<V> {
    type NonceSize = U16;
    type TagSize = U16; // 128-bit tag for every variant.
    type CiphertextOverhead = U0;
}

impl<V: AeadVariant> AeadInPlace for AsconAead<V> {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let mut state = initialize::<V>(self.key.as_slice(), nonce.as_slice());

        absorb_associated_data::<V>(&mut state, associated_data);
        encrypt_inplace::<V>(&mut state, buffer);
        let tag = finalize::<V>(&mut state, self.key.as_slice());

        state.zeroize();
        Ok(GenericArray::clone_from_slice(&tag))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let mut state = initialize::<V>(self.key.as_slice(), nonce.as_slice());

        absorb_associated_data::<V>(&mut state, associated_data);
        decrypt_inplace::<V>(&mut state, buffer);
        let mut expected = finalize::<V>(&mut state, self.key.as_slice());

        state.zeroize();

        // The comparison runs over the full tag length and the decision is
        // taken only after the whole duplex pass has completed.
        let verified = ct_compare(&expected, tag.as_slice());
        expected.zeroize();

        if verified {
            Ok(())
        } else {
            // Unauthenticated plaintext is never released.
            buffer.iter_mut().for_each(|b| *b = 0);
            Err(Error)
        }
    }
}

/// Reads a big-endian 64-bit word from an 8-byte slice.
#[inline]
fn load(bytes: &[u8]) -> u64 {
    u64::from_be_bytes(bytes.try_into().unwrap())
}

/// Reads a big-endian 32-bit word from a 4-byte slice, widened to 64 bits.
#[inline]
fn load32(bytes: &[u8]) -> u64 {
    u32::from_be_bytes(bytes.try_into().unwrap()) as u64
}

/// Loads IV, key and nonce into the state, runs the initialization
/// permutation and applies the key feedback into the capacity.
fn initialize<V: AeadVariant>(key: &[u8], nonce: &[u8]) -> [u64; STATE_WORDS] {
    let mut state = [0u64; STATE_WORDS];

    if V::KEY_SIZE == 20 {
        // The 32-bit variant identifier shares word 0 with the leading
        // key bytes.
        state[0] = (V::IV << 32) | load32(&key[..4]);
        state[1] = load(&key[4..12]);
        state[2] = load(&key[12..20]);
    } else {
        state[0] = V::IV;
        state[1] = load(&key[..8]);
        state[2] = load(&key[8..16]);
    }
    state[3] = load(&nonce[..8]);
    state[4] = load(&nonce[8..16]);

    backends::permute(&mut state, V::ROUNDS_A);

    if V::KEY_SIZE == 20 {
        state[2] ^= load32(&key[..4]);
        state[3] ^= load(&key[4..12]);
        state[4] ^= load(&key[12..20]);
    } else {
        state[3] ^= load(&key[..8]);
        state[4] ^= load(&key[8..16]);
    }

    state
}

/// XORs one rate-sized block into the leading state words.
#[inline]
fn absorb_block<V: AeadVariant>(state: &mut [u64; STATE_WORDS], block: &[u8]) {
    state[0] ^= load(&block[..8]);
    if V::RATE == 16 {
        state[1] ^= load(&block[8..16]);
    }
}

/// Absorbs the associated data and applies the domain separator.
fn absorb_associated_data<V: AeadVariant>(state: &mut [u64; STATE_WORDS], ad: &[u8]) {
    if !ad.is_empty() {
        let mut blocks = ad.chunks_exact(V::RATE);
        for block in blocks.by_ref() {
            absorb_block::<V>(state, block);
            backends::permute(state, V::ROUNDS_B);
        }

        // Final block, padded with 0x80 right after the data. A stream
        // that fills its last block exactly still absorbs one padding-only
        // block here.
        let rem = blocks.remainder();
        let mut last = [0u8; 16];
        last[..rem.len()].copy_from_slice(rem);
        last[rem.len()] = 0x80;
        absorb_block::<V>(state, &last[..V::RATE]);
        backends::permute(state, V::ROUNDS_B);
    }

    // Separator between associated data and plaintext, applied exactly
    // once even when there is no associated data.
    state[4] ^= 1;
}

/// Duplexes the plaintext buffer into ciphertext in place.
fn encrypt_inplace<V: AeadVariant>(state: &mut [u64; STATE_WORDS], buffer: &mut [u8]) {
    let mut blocks = buffer.chunks_exact_mut(V::RATE);
    for block in blocks.by_ref() {
        state[0] ^= load(&block[..8]);
        block[..8].copy_from_slice(&state[0].to_be_bytes());
        if V::RATE == 16 {
            state[1] ^= load(&block[8..16]);
            block[8..16].copy_from_slice(&state[1].to_be_bytes());
        }
        backends::permute(state, V::ROUNDS_B);
    }

    // Final (possibly empty) partial block: pad, XOR into the rate and
    // emit the remaining ciphertext bytes. No permutation follows; the
    // finalization permutation takes its place.
    let rem = blocks.into_remainder();
    let mut last = [0u8; 16];
    last[..rem.len()].copy_from_slice(rem);
    last[rem.len()] = 0x80;
    absorb_block::<V>(state, &last[..V::RATE]);

    let mut rate_bytes = [0u8; 16];
    rate_bytes[..8].copy_from_slice(&state[0].to_be_bytes());
    if V::RATE == 16 {
        rate_bytes[8..16].copy_from_slice(&state[1].to_be_bytes());
    }
    rem.copy_from_slice(&rate_bytes[..rem.len()]);
}

/// Duplexes the ciphertext buffer into plaintext in place, restoring the
/// ciphertext into the rate so the state evolves exactly as it did during
/// encryption.
fn decrypt_inplace<V: AeadVariant>(state: &mut [u64; STATE_WORDS], buffer: &mut [u8]) {
    let mut blocks = buffer.chunks_exact_mut(V::RATE);
    for block in blocks.by_ref() {
        let c0 = load(&block[..8]);
        block[..8].copy_from_slice(&(state[0] ^ c0).to_be_bytes());
        state[0] = c0;
        if V::RATE == 16 {
            let c1 = load(&block[8..16]);
            block[8..16].copy_from_slice(&(state[1] ^ c1).to_be_bytes());
            state[1] = c1;
        }
        backends::permute(state, V::ROUNDS_B);
    }

    // Final partial block: only the ciphertext prefix of the rate is
    // replaced; the padding byte lands right after it.
    let rem = blocks.into_remainder();
    let mut rate_bytes = [0u8; 16];
    rate_bytes[..8].copy_from_slice(&state[0].to_be_bytes());
    if V::RATE == 16 {
        rate_bytes[8..16].copy_from_slice(&state[1].to_be_bytes());
    }
    for (slot, byte) in rate_bytes.iter_mut().zip(rem.iter_mut()) {
        let c = *byte;
        *byte = *slot ^ c;
        *slot = c;
    }
    rate_bytes[rem.len()] ^= 0x80;
    state[0] = load(&rate_bytes[..8]);
    if V::RATE == 16 {
        state[1] = load(&rate_bytes[8..16]);
    }
}

/// Injects the key after the rate, runs the finalization permutation and
/// extracts the whitened tag from the last two state words.
fn finalize<V: AeadVariant>(state: &mut [u64; STATE_WORDS], key: &[u8]) -> [u8; TAG_SIZE] {
    if V::KEY_SIZE == 20 {
        state[1] ^= load(&key[..8]);
        state[2] ^= load(&key[8..16]);
        state[3] ^= load32(&key[16..20]) << 32;
    } else if V::RATE == 8 {
        state[1] ^= load(&key[..8]);
        state[2] ^= load(&key[8..16]);
    } else {
        state[2] ^= load(&key[..8]);
        state[3] ^= load(&key[8..16]);
    }

    backends::permute(state, V::ROUNDS_A);

    let hi = state[3] ^ load(&key[V::KEY_SIZE - 16..V::KEY_SIZE - 8]);
    let lo = state[4] ^ load(&key[V::KEY_SIZE - 8..]);

    let mut tag = [0u8; TAG_SIZE];
    tag[..8].copy_from_slice(&hi.to_be_bytes());
    tag[8..].copy_from_slice(&lo.to_be_bytes());
    tag
}

/// Constant-time comparison over the full tag length.
fn ct_compare(a: &[u8], b: &[u8]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
