// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
//
// This file serves as the main library entry point for the keccak miner,
// located at the root of the source tree. It exports all public modules
// and types that the binary and integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, miner, benchmark, utils, web_server

pub mod benchmark;
pub mod core;
pub mod miner;
pub mod utils;
pub mod web_server;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::{measure_rate, BenchmarkRunner};
pub use crate::core::{keccak256, Difficulty, MinerError, SearchOutcome, SearchRequest};
pub use crate::miner::cpu::{search, CpuMiner, SearchConfig};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.0.0 (2026-10-15): Initial library layout.
//   - Exports core, miner, benchmark, utils and web_server modules.
//   - Re-exports the search, benchmark and digest entry points at the crate root.
