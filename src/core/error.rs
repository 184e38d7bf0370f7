// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.0.0
//
// This file defines the error type shared by the search engine, the benchmark
// harness and the mining service.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinerError {
    #[error("{field} must be exactly {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Difficulty must require between 1 and 32 zero bits, got {0}")]
    InvalidDifficulty(u32),

    #[error("Worker count {requested} exceeds the limit of {max}")]
    TooManyWorkers { requested: usize, max: usize },

    #[error("Benchmark duration must be greater than zero")]
    InvalidDuration,

    #[error("{field} is not valid hex")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Malformed request payload: {source}")]
    InvalidPayload {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),

    #[error("Nonce space exhausted without a qualifying digest")]
    Exhausted,

    #[error("Worker {0} panicked")]
    WorkerPanicked(usize),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Search task failed to complete")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
}

// Changelog:
// - v1.0.0 (2026-10-15): Initial MinerError taxonomy.
//   - Added TooManyWorkers for worker counts above MAX_THREADS.
//   - Io now also carries thread spawn failures.
