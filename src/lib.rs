//======================================================================
// src/lib.rs
// Crate entry point. Declares the modules and the public type aliases.
//======================================================================
#![no_std]
#![doc = include_str!("../README.md")]

// --- Module Declarations ---

mod backends;
pub mod consts;
pub mod variant;

pub mod aead;
pub mod sponge;

// --- Test Module ---
#[cfg(test)]
mod tests;

// --- Re-exports ---

pub use ::aead as aead_api;
pub use digest;

use variant::{Ascon128, Ascon128a, Ascon80pq, Hash, HashA, Xof, XofA};

// --- AEAD Aliases ---

/// Ascon-128 authenticated cipher (128-bit key, 64-bit rate, p12/p6).
pub type Ascon128Aead = aead::AsconAead<Ascon128>;

/// Ascon-128a authenticated cipher (128-bit key, 128-bit rate, p12/p8).
pub type Ascon128aAead = aead::AsconAead<Ascon128a>;

/// Ascon-80pq authenticated cipher (160-bit key, 64-bit rate, p12/p6).
pub type Ascon80pqAead = aead::AsconAead<Ascon80pq>;

// --- Hash & XOF Aliases ---

/// Ascon-Hash, fixed 32-byte digest.
pub type AsconHash = sponge::FixedHasher<Hash>;

/// Ascon-HashA, fixed 32-byte digest.
pub type AsconHashA = sponge::FixedHasher<HashA>;

/// Ascon-Xof extendable-output function.
pub type AsconXof = sponge::Hasher<Xof>;

/// Ascon-XofA extendable-output function.
pub type AsconXofA = sponge::Hasher<XofA>;

/// Output reader produced by finalizing [`AsconXof`].
pub type AsconXofReader = sponge::Reader<Xof>;

/// Output reader produced by finalizing [`AsconXofA`].
pub type AsconXofAReader = sponge::Reader<XofA>;
