use std::collections::VecDeque;

use rand::Rng;

use crate::domain::{Block, TimeMs};

/// Number of blocks kept in the feed.
pub const FEED_CAP: usize = 5;

/// Newest-first feed of fabricated blocks.
#[derive(Debug, Clone)]
pub struct BlockFeed {
    blocks: VecDeque<Block>,
    next_id: u64,
}

impl BlockFeed {
    pub fn new() -> Self {
        Self {
            blocks: VecDeque::with_capacity(FEED_CAP + 1),
            next_id: 1,
        }
    }

    /// Fabricate the next block and drop anything beyond the cap.
    pub fn mine<R: Rng>(&mut self, rng: &mut R, now: TimeMs) -> Block {
        let hash_bytes: [u8; 3] = rng.gen();
        let block = Block {
            id: self.next_id,
            hash: format!("0x{}...", hex::encode(hash_bytes)),
            transactions: rng.gen_range(1..=10),
            mined_by: format!("AuraMiner-{}", rng.gen_range(0..100)),
            time: now,
        };
        self.next_id += 1;

        self.blocks.push_front(block.clone());
        self.blocks.truncate(FEED_CAP);
        block
    }

    /// Newest first.
    pub fn blocks(&self) -> Vec<Block> {
        self.blocks.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for BlockFeed {
    fn default() -> Self {
        Self::new()
    }
}
