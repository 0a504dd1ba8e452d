//======================================================================
// src/consts.rs
// Shared constants for the Ascon permutation and its modes.
//======================================================================

/// Number of 64-bit words in the permutation state.
pub const STATE_WORDS: usize = 5;

/// Full round count of the permutation; the constant table holds exactly
/// this many entries.
pub const MAX_ROUNDS: usize = 12;

/// Round constants, XORed into the low byte of word 2. A reduced-round
/// permutation consumes the tail of this table, so p^b matches the last
/// `b` rounds of p^12.
pub const ROUND_CONSTANTS: [u64; MAX_ROUNDS] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Nonce length in bytes, shared by every AEAD variant.
pub const NONCE_SIZE: usize = 16;

/// Authentication tag length in bytes.
pub const TAG_SIZE: usize = 16;

/// Digest length of the fixed-output hash variants, in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Sponge rate of the hash and XOF variants, in bytes.
pub const HASH_RATE: usize = 8;
