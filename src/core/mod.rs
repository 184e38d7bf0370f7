// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the core functionality of the keccak
// miner, located in the core subdirectory. It declares submodules and re-exports
// key types for use throughout the project.

pub mod difficulty;
pub mod error;
pub mod keccak;
pub mod types;

// Re-export the most commonly used items
pub use difficulty::Difficulty;
pub use error::MinerError;
pub use keccak::{keccak256, CandidateBuffer};
pub use types::{MAX_THREADS, Args, BenchmarkResult, SearchOutcome, SearchReport, SearchRequest, Solution};

// Changelog:
// - v1.0.0 (2026-10-15): Initial core module declarations and re-exports.
