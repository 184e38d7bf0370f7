// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/difficulty.rs
// Version: 1.0.0
//
// This file contains the validity predicate applied to every digest, located
// in the core subdirectory. A digest qualifies when the low-order bits of its
// first four bytes, read as a little-endian u32, are all zero.

use crate::core::error::MinerError;
use crate::core::keccak::DIGEST_LEN;
use log::debug;

const LOG_TARGET: &str = "keccak_miner::difficulty";

/// Zero bits required by deployed verifiers (success probability 2^-24).
pub const DEFAULT_ZERO_BITS: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    zero_bits: u32,
    mask: u32,
}

impl Difficulty {
    pub fn new(zero_bits: u32) -> Result<Self, MinerError> {
        if !(1..=32).contains(&zero_bits) {
            return Err(MinerError::InvalidDifficulty(zero_bits));
        }
        let mask = if zero_bits == 32 {
            u32::MAX
        } else {
            (1u32 << zero_bits) - 1
        };
        debug!(target: LOG_TARGET, "Difficulty {} bits -> mask {:08x}", zero_bits, mask);
        Ok(Self { zero_bits, mask })
    }

    pub fn zero_bits(&self) -> u32 {
        self.zero_bits
    }

    /// Expected number of attempts per qualifying digest.
    pub fn expected_attempts(&self) -> f64 {
        2f64.powi(self.zero_bits as i32)
    }

    /// Tests the low `zero_bits` of digest bytes `[0:4)` read as a little-endian u32.
    #[inline]
    pub fn is_met(&self, digest: &[u8; DIGEST_LEN]) -> bool {
        let word = u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]);
        word & self.mask == 0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            zero_bits: DEFAULT_ZERO_BITS,
            mask: 0x00FF_FFFF,
        }
    }
}


// Changelog:
// - v1.0.0 (2026-10-15): Initial low-zero-bits predicate.
//   - is_met takes a full 32-byte digest so short input cannot reach it.
