//======================================================================
// src/sponge.rs
// Ascon hash and XOF modes over the `digest` core API.
//
// One sponge core drives all four variants; the fixed 32-byte digest
// types are thin wrappers that squeeze exactly four rate blocks.
//======================================================================

use crate::backends;
use crate::consts::{DIGEST_SIZE, MAX_ROUNDS, STATE_WORDS};
use crate::variant::HashVariant;
use core::marker::PhantomData;
use digest::{
    block_buffer::Eager,
    core_api::{
        Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, ExtendableOutputCore,
        FixedOutputCore, OutputSizeUser, UpdateCore, XofReaderCore, XofReaderCoreWrapper,
    },
    HashMarker, Output, Reset,
};
use zeroize::Zeroize;

/// Low-level sponge engine shared by the hash and XOF variants.
#[derive(Clone)]
pub struct SpongeCore<V: HashVariant> {
    state: [u64; STATE_WORDS],
    _variant: PhantomData<V>,
}

impl<V: HashVariant> Default for SpongeCore<V> {
    fn default() -> Self {
        // The initial state is the full permutation applied to the
        // variant's parameter word.
        let mut state = [V::IV, 0, 0, 0, 0];
        backends::permute(&mut state, MAX_ROUNDS);
        Self {
            state,
            _variant: PhantomData,
        }
    }
}

impl<V: HashVariant> SpongeCore<V> {
    fn absorb_block(&mut self, block: &Block<Self>) {
        self.state[0] ^= u64::from_be_bytes(block.as_slice().try_into().unwrap());
        backends::permute(&mut self.state, V::ROUNDS_B);
    }
}

impl<V: HashVariant> Drop for SpongeCore<V> {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl<V: HashVariant> HashMarker for SpongeCore<V> {}

impl<V: HashVariant> BlockSizeUser for SpongeCore<V> {
    type BlockSize = digest::consts::U8;
}

impl<V: HashVariant> BufferKindUser for SpongeCore<V> {
    type BufferKind = Eager;
}

impl<V: HashVariant> Reset for SpongeCore<V> {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<V: HashVariant> UpdateCore for SpongeCore<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.absorb_block(block);
        }
    }
}

impl<V: HashVariant> ExtendableOutputCore for SpongeCore<V> {
    type ReaderCore = ReaderCore<V>;

    #[inline]
    fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
        // Pad the residual bytes with 0x80; a message that fills its last
        // block exactly absorbs one padding-only block here. The final
        // block always gets the full permutation.
        let data = buffer.get_data();
        let mut last = [0u8; 8];
        last[..data.len()].copy_from_slice(data);
        last[data.len()] = 0x80;
        self.state[0] ^= u64::from_be_bytes(last);

        backends::permute(&mut self.state, MAX_ROUNDS);

        ReaderCore {
            state: self.state,
            _variant: PhantomData,
        }
    }
}

/// XOF reader squeezing one rate block at a time.
#[derive(Clone)]
pub struct ReaderCore<V: HashVariant> {
    state: [u64; STATE_WORDS],
    _variant: PhantomData<V>,
}

impl<V: HashVariant> Drop for ReaderCore<V> {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl<V: HashVariant> BlockSizeUser for ReaderCore<V> {
    type BlockSize = digest::consts::U8;
}

impl<V: HashVariant> XofReaderCore for ReaderCore<V> {
    #[inline]
    fn read_block(&mut self) -> Block<Self> {
        // Extract the current rate, then permute for the next block.
        let block = Block::<Self>::clone_from_slice(&self.state[0].to_be_bytes());
        backends::permute(&mut self.state, V::ROUNDS_B);
        block
    }
}

/// Wraps the sponge core with a fixed 32-byte output, for the `Digest`
/// interface of the hash variants.
#[derive(Clone)]
pub struct Fixed32Core<V: HashVariant>(SpongeCore<V>);

impl<V: HashVariant> Default for Fixed32Core<V> {
    fn default() -> Self {
        Self(SpongeCore::default())
    }
}

impl<V: HashVariant> HashMarker for Fixed32Core<V> {}

impl<V: HashVariant> BlockSizeUser for Fixed32Core<V> {
    type BlockSize = <SpongeCore<V> as BlockSizeUser>::BlockSize;
}

impl<V: HashVariant> BufferKindUser for Fixed32Core<V> {
    type BufferKind = <SpongeCore<V> as BufferKindUser>::BufferKind;
}

impl<V: HashVariant> Reset for Fixed32Core<V> {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<V: HashVariant> UpdateCore for Fixed32Core<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.0.update_blocks(blocks);
    }
}

impl<V: HashVariant> OutputSizeUser for Fixed32Core<V> {
    type OutputSize = digest::consts::U32;
}

impl<V: HashVariant> FixedOutputCore for Fixed32Core<V> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        debug_assert_eq!(out.len(), DIGEST_SIZE);
        let mut reader = self.0.finalize_xof_core(buffer);
        for chunk in out.chunks_exact_mut(8) {
            chunk.copy_from_slice(reader.read_block().as_slice());
        }
    }
}

/// Incremental hasher with extendable output, generic over the variant.
pub type Hasher<V> = CoreWrapper<SpongeCore<V>>;

/// Incremental hasher with a fixed 32-byte digest, generic over the
/// variant.
pub type FixedHasher<V> = CoreWrapper<Fixed32Core<V>>;

/// XOF output reader, generic over the variant.
pub type Reader<V> = XofReaderCoreWrapper<ReaderCore<V>>;
