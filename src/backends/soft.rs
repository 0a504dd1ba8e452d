//======================================================================
// src/backends/soft.rs
// The software (scalar) backend for the Ascon permutation.
//======================================================================

use crate::consts::{MAX_ROUNDS, ROUND_CONSTANTS, STATE_WORDS};

/// Applies `rounds` rounds of the Ascon permutation to `state` in place.
///
/// Constant selection counts down from the end of the schedule: an
/// `r`-round application consumes `ROUND_CONSTANTS[12 - r..]`, so the
/// reduced-round permutations used between sponge blocks are suffixes of
/// the full 12-round permutation.
#[inline(always)]
pub(crate) fn permute(state: &mut [u64; STATE_WORDS], rounds: usize) {
    debug_assert!(0 < rounds && rounds <= MAX_ROUNDS);
    for &rc in &ROUND_CONSTANTS[MAX_ROUNDS - rounds..] {
        round(state, rc);
    }
}

/// A single round: constant addition, substitution layer, linear
/// diffusion layer.
#[inline(always)]
fn round(s: &mut [u64; STATE_WORDS], rc: u64) {
    // Constant addition.
    s[2] ^= rc;

    // Substitution layer. The 5-bit S-box is evaluated columnwise across
    // all 64 bit positions with word-wide AND/XOR/NOT, keeping the layer
    // free of table lookups.
    s[0] ^= s[4];
    s[4] ^= s[3];
    s[2] ^= s[1];

    let t0 = !s[0] & s[1];
    let t1 = !s[1] & s[2];
    let t2 = !s[2] & s[3];
    let t3 = !s[3] & s[4];
    let t4 = !s[4] & s[0];

    s[0] ^= t1;
    s[1] ^= t2;
    s[2] ^= t3;
    s[3] ^= t4;
    s[4] ^= t0;

    s[1] ^= s[0];
    s[0] ^= s[4];
    s[3] ^= s[2];
    s[2] = !s[2];

    // Linear diffusion layer, one fixed rotation pair per word.
    s[0] ^= s[0].rotate_right(19) ^ s[0].rotate_right(28);
    s[1] ^= s[1].rotate_right(61) ^ s[1].rotate_right(39);
    s[2] ^= s[2].rotate_right(1) ^ s[2].rotate_right(6);
    s[3] ^= s[3].rotate_right(10) ^ s[3].rotate_right(17);
    s[4] ^= s[4].rotate_right(7) ^ s[4].rotate_right(41);
}
