// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for per-worker statistics, located in
// the stats subdirectory of the miner module.

pub mod thread_stats;

pub use thread_stats::ThreadStats;

// Changelog:
// - v1.0.0 (2026-10-15): Initial stats module declarations.
