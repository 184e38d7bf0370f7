// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/signal.rs
// Version: 1.0.0
//
// This file implements the one-shot stop signal shared by the workers of a
// single search or benchmark run.

use crossbeam::utils::CachePadded;
use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot flag: starts unset, is set exactly once, never reset.
#[derive(Debug, Default)]
pub struct StopSignal {
    flag: CachePadded<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Polled on every attempt in the hot loop.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Transition unset -> set. Returns `true` for exactly one caller.
    pub fn try_claim(&self) -> bool {
        self.flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Set the flag unconditionally, waking every polling worker.
    pub fn broadcast(&self) {
        self.flag.store(true, Ordering::Release);
    }
}


// Changelog:
// - v1.0.0 (2026-10-15): Initial one-shot stop signal with single-winner claim.
