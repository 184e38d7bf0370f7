// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/thread_stats.rs
// Version: 1.0.0
//
// This file implements per-worker statistics slots, located in the stats
// subdirectory of the miner module. Workers publish their running hash count
// here at a coarse interval so a reporter can log interim hashrates.
//
// Tree Location:
// - src/miner/stats/thread_stats.rs (per-worker statistics)
// - Depends on: crossbeam

use crossbeam::utils::CachePadded;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hashes between two publications to a worker's stats slot.
pub const PUBLISH_INTERVAL: u64 = 1 << 12;

#[derive(Debug)]
pub struct ThreadStats {
    thread_id: usize,
    hashes_computed: CachePadded<AtomicU64>,
}

impl ThreadStats {
    /// Create a new ThreadStats instance for a specific thread
    pub fn new(thread_id: usize) -> Self {
        Self {
            thread_id,
            hashes_computed: CachePadded::new(AtomicU64::new(0)),
        }
    }

    pub fn thread_id(&self) -> usize {
        self.thread_id
    }

    /// Overwrite the slot with the worker's running total.
    #[inline]
    pub fn publish(&self, total_hashes: u64) {
        self.hashes_computed.store(total_hashes, Ordering::Relaxed);
    }

    pub fn hashes(&self) -> u64 {
        self.hashes_computed.load(Ordering::Relaxed)
    }

    /// Sum of the published counts of every worker.
    pub fn sum(stats: &[ThreadStats]) -> u64 {
        stats.iter().map(ThreadStats::hashes).sum()
    }
}


// Changelog:
// - v1.0.0 (2026-10-15): Initial per-worker published hash counters.
