// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 1.0.0
//
// This file declares the benchmark module, which measures sustained Keccak-256
// throughput of the host using the search engine's hash loop.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: runner

pub mod runner;

// Re-export key benchmark types and functions
pub use runner::{measure_rate, BenchmarkConfig, BenchmarkRunner};

// Changelog:
// - v1.0.0 (2026-10-15): Initial benchmark module declarations.
