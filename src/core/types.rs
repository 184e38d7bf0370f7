// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
//
// This file defines core data structures for the keccak miner, located in the
// core subdirectory. It includes types for command-line arguments, search
// requests, search outcomes and benchmark results.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, hex

use crate::core::difficulty::DEFAULT_ZERO_BITS;
use crate::core::error::MinerError;
use crate::core::keccak::{CHALLENGE_LEN, DIGEST_LEN, SIGNER_LEN};
use crate::utils::format::FormatUtils;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// Upper bound on workers per search or benchmark run.
pub const MAX_THREADS: usize = 1024;

/// Command-line arguments for the keccak miner
#[derive(Parser, Debug)]
#[command(
    name = "keccak-miner",
    version,
    about = "Parallel Keccak-256 nonce search service and hashrate benchmark",
    long_about = "keccak-miner searches for an 8-byte nonce such that\n\
                  keccak256(challenge || signer || nonce) has its low-order bits zeroed.\n\n\
                  SERVE (default): HTTP endpoint POST /mine returning the nonce as text\n\
                  BENCHMARK: Measures sustained hashrate without searching for a target\n\
                  SOLVE: Runs one search from the command line and prints the nonce\n\n\
                  Examples:\n\
                    Serve: keccak-miner --bind 0.0.0.0:7070 --threads 8\n\
                    Benchmark: keccak-miner --benchmark --benchmark-duration 15\n\
                    Solve: keccak-miner --solve --challenge <64 hex chars> --signer <32 hex chars>"
)]
pub struct Args {
    /// Number of worker threads
    /// 0 = one per logical processor (recommended); larger values oversubscribe
    #[arg(
        short,
        long,
        default_value = "0",
        value_name = "COUNT",
        help = "Number of worker threads (0 = auto-detect)"
    )]
    pub threads: usize,

    /// Low-order digest bits that must be zero
    #[arg(
        long,
        default_value_t = DEFAULT_ZERO_BITS,
        value_name = "BITS",
        help = "Required zero bits in the first digest word [1-32]"
    )]
    pub difficulty_bits: u32,

    /// Address the mining service listens on
    #[arg(
        long,
        default_value = "0.0.0.0:7070",
        value_name = "HOST:PORT",
        help = "Listen address for the mining service"
    )]
    pub bind: String,

    /// The single origin allowed to call the service from a browser
    #[arg(
        long,
        default_value = "https://suimine.xyz",
        value_name = "ORIGIN",
        help = "Trusted CORS origin"
    )]
    pub allowed_origin: String,

    /// Run in benchmark mode (no service started)
    #[arg(long, default_value = "false", help = "Run hashrate benchmark")]
    pub benchmark: bool,

    /// Benchmark duration in seconds
    #[arg(
        long,
        default_value = "15",
        value_name = "SECONDS",
        help = "Benchmark duration in seconds"
    )]
    pub benchmark_duration: u64,

    /// Run a single search and print the nonce
    #[arg(long, default_value = "false", help = "Solve one challenge and exit")]
    pub solve: bool,

    /// Challenge hash as hex (32 bytes)
    #[arg(long, value_name = "HEX")]
    pub challenge: Option<String>,

    /// Signer identifier as hex (16 bytes)
    #[arg(long, value_name = "HEX")]
    pub signer: Option<String>,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.benchmark && self.solve {
            return Err("--benchmark and --solve cannot be combined".to_string());
        }

        if self.solve && (self.challenge.is_none() || self.signer.is_none()) {
            return Err("--solve requires both --challenge and --signer".to_string());
        }

        if !(1..=32).contains(&self.difficulty_bits) {
            return Err("Difficulty bits must be between 1 and 32".to_string());
        }

        if self.benchmark_duration == 0 {
            return Err("Benchmark duration must be greater than 0 seconds".to_string());
        }

        if self.benchmark_duration > 3600 {
            return Err("Benchmark duration cannot exceed 1 hour (3600 seconds)".to_string());
        }

        if self.threads > MAX_THREADS {
            return Err(format!("Thread count cannot exceed {}", MAX_THREADS));
        }

        if self.bind.parse::<SocketAddr>().is_err() {
            return Err("Bind address must be in format IP:PORT (e.g., 0.0.0.0:7070)".to_string());
        }

        if !self.allowed_origin.starts_with("http://") && !self.allowed_origin.starts_with("https://") {
            return Err("Allowed origin must start with http:// or https://".to_string());
        }

        Ok(())
    }
}

/// Challenge and signer for one search. Lengths are fixed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    pub challenge: [u8; CHALLENGE_LEN],
    pub signer: [u8; SIGNER_LEN],
}

impl SearchRequest {
    pub fn new(challenge: &[u8], signer: &[u8]) -> Result<Self, MinerError> {
        let challenge = challenge
            .try_into()
            .map_err(|_| MinerError::InvalidLength {
                field: "challenge",
                expected: CHALLENGE_LEN,
                actual: challenge.len(),
            })?;
        let signer = signer.try_into().map_err(|_| MinerError::InvalidLength {
            field: "signer",
            expected: SIGNER_LEN,
            actual: signer.len(),
        })?;
        Ok(Self { challenge, signer })
    }

    pub fn from_hex(challenge: &str, signer: &str) -> Result<Self, MinerError> {
        let challenge = hex::decode(challenge.trim_start_matches("0x")).map_err(|source| {
            MinerError::InvalidHex {
                field: "challenge",
                source,
            }
        })?;
        let signer = hex::decode(signer.trim_start_matches("0x"))
            .map_err(|source| MinerError::InvalidHex { field: "signer", source })?;
        Self::new(&challenge, &signer)
    }

    /// Fixed inputs used by the benchmark: challenge 0x01..=0x20, signer 0x21..=0x30.
    pub fn benchmark_default() -> Self {
        Self {
            challenge: std::array::from_fn(|i| i as u8 + 0x01),
            signer: std::array::from_fn(|i| i as u8 + 0x21),
        }
    }
}

/// A qualifying nonce together with the digest that proved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub nonce: u64,
    pub digest: [u8; DIGEST_LEN],
    pub worker_id: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Solution),
    /// Every worker ran out of nonces without a qualifying digest.
    Exhausted,
}

impl SearchOutcome {
    pub fn nonce(&self) -> Option<u64> {
        match self {
            SearchOutcome::Found(solution) => Some(solution.nonce),
            SearchOutcome::Exhausted => None,
        }
    }

    pub fn into_nonce(self) -> Result<u64, MinerError> {
        self.nonce().ok_or(MinerError::Exhausted)
    }
}

/// Outcome of one search plus the work it took.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Digests computed across all workers
    pub attempts: u64,
    pub workers: usize,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn hashrate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.attempts as f64 / secs
        } else {
            0.0
        }
    }
}

/// Benchmark results for performance testing
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Total hashes computed
    pub total_hashes: u64,

    /// Measured duration of the hashing window
    pub duration: Duration,

    /// Average hashrate (H/s)
    pub hashrate: f64,

    /// Highest aggregate hashrate seen by the progress reporter (H/s)
    pub peak_hashrate: f64,

    /// Thread count used
    pub thread_count: usize,
}

impl BenchmarkResult {
    /// Calculate hashrate from totals
    pub fn calculate_hashrate(total_hashes: u64, duration: Duration) -> f64 {
        total_hashes as f64 / duration.as_secs_f64()
    }

    pub fn mega_hashes_per_second(&self) -> f64 {
        self.hashrate / 1_000_000.0
    }

    /// Format hashrate for display
    pub fn format_hashrate(&self) -> String {
        FormatUtils::format_hashrate(self.hashrate)
    }
}


// Changelog:
// - v1.0.0 (2026-10-15): Initial Args, request, outcome and benchmark result types.
//   - Added MAX_THREADS shared by Args::validate, search and benchmark.
