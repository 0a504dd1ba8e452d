//======================================================================
// src/variant.rs
// Defines parameter variants for the Ascon AEAD and hash families.
//======================================================================

use ::aead::consts::{U16, U20};
use ::aead::generic_array::ArrayLength;

/// A trait that defines the parameters of a specific Ascon AEAD variant.
pub trait AeadVariant: Sized + Clone {
    /// Key size in bytes.
    type KeySize: ArrayLength<u8>;
    const KEY_SIZE: usize;

    /// Sponge rate in bytes (8 or 16).
    const RATE: usize;

    /// Round count of the initialization and finalization permutations.
    const ROUNDS_A: usize;
    /// Round count of the intermediate permutations.
    const ROUNDS_B: usize;

    /// Variant identifier loaded into word 0 of the initial state. For the
    /// 20-byte-key variant this is a 32-bit value that shares word 0 with
    /// the leading key bytes.
    const IV: u64;
}

/// Ascon-128: 128-bit key, 64-bit rate, p12/p6.
#[derive(Clone)]
pub struct Ascon128;
impl AeadVariant for Ascon128 {
    type KeySize = U16;
    const KEY_SIZE: usize = 16;
    const RATE: usize = 8;
    const ROUNDS_A: usize = 12;
    const ROUNDS_B: usize = 6;
    const IV: u64 = 0x8040_0c06_0000_0000;
}

/// Ascon-128a: 128-bit key, 128-bit rate, p12/p8.
#[derive(Clone)]
pub struct Ascon128a;
impl AeadVariant for Ascon128a {
    type KeySize = U16;
    const KEY_SIZE: usize = 16;
    const RATE: usize = 16;
    const ROUNDS_A: usize = 12;
    const ROUNDS_B: usize = 8;
    const IV: u64 = 0x8080_0c08_0000_0000;
}

/// Ascon-80pq: 160-bit key, 64-bit rate, p12/p6.
#[derive(Clone)]
pub struct Ascon80pq;
impl AeadVariant for Ascon80pq {
    type KeySize = U20;
    const KEY_SIZE: usize = 20;
    const RATE: usize = 8;
    const ROUNDS_A: usize = 12;
    const ROUNDS_B: usize = 6;
    const IV: u64 = 0xa040_0c06;
}

/// A trait that defines the parameters of a specific Ascon hash or XOF
/// variant. All of them share the 64-bit rate; they differ in the
/// initialization word and the round count between sponge blocks.
pub trait HashVariant: Sized + Clone {
    /// Parameter word placed in word 0 of the all-zero state, which is then
    /// run through the full permutation to produce the initial state.
    const IV: u64;

    /// Round count between absorbed blocks and between squeezed blocks.
    const ROUNDS_B: usize;
}

/// Ascon-Hash: 256-bit digest, p12/p12.
#[derive(Clone)]
pub struct Hash;
impl HashVariant for Hash {
    const IV: u64 = 0x0040_0c00_0000_0100;
    const ROUNDS_B: usize = 12;
}

/// Ascon-HashA: 256-bit digest, p12/p8.
#[derive(Clone)]
pub struct HashA;
impl HashVariant for HashA {
    const IV: u64 = 0x0040_0c04_0000_0100;
    const ROUNDS_B: usize = 8;
}

/// Ascon-Xof: arbitrary-length output, p12/p12.
#[derive(Clone)]
pub struct Xof;
impl HashVariant for Xof {
    const IV: u64 = 0x0040_0c00_0000_0000;
    const ROUNDS_B: usize = 12;
}

/// Ascon-XofA: arbitrary-length output, p12/p8.
#[derive(Clone)]
pub struct XofA;
impl HashVariant for XofA {
    const IV: u64 = 0x0040_0c04_0000_0000;
    const ROUNDS_B: usize = 8;
}
