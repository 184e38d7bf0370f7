// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the miner functionality, located in
// the miner subdirectory. It declares submodules and re-exports key types.
//
// Tree Location:
// - src/miner/mod.rs (miner module entry point)
// - Submodules: cpu, signal, stats

pub mod cpu;
pub mod signal;
pub mod stats;

// Re-export key types for convenience
pub use cpu::{CpuMiner, SearchConfig};
pub use signal::StopSignal;
pub use stats::ThreadStats;

// Changelog:
// - v1.0.0 (2026-10-15): Initial miner module declarations.
