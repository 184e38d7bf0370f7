// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/cpu/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the CPU search engine, located in
// the cpu subdirectory of the miner module.
//
// Tree Location:
// - src/miner/cpu/mod.rs (CPU search module entry point)
// - Submodules: miner, thread

pub mod miner;
pub mod thread;

// Re-export key types for convenience
pub use miner::{search, CpuMiner, SearchConfig};

// Changelog:
// - v1.0.0 (2026-10-15): Initial CPU search module declarations.
