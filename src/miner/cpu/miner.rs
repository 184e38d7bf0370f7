// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/cpu/miner.rs
// Version: 1.0.0
//
// This file implements the parallel nonce search engine. Each search spawns
// its own worker set and stop signal, waits for every worker at a join
// barrier, and reports either the first discovered solution or exhaustion.

use crate::core::{Difficulty, MinerError, SearchOutcome, SearchReport, SearchRequest, MAX_THREADS};
use crate::miner::signal::StopSignal;
use log::{debug, error, info};
use std::thread;
use std::time::Instant;

use super::thread::{search_worker, WorkerOutput};

const LOG_TARGET: &str = "keccak_miner::cpu_miner";

/// Configuration for one search engine instance
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub workers: usize,
    pub difficulty: Difficulty,
    /// Inclusive upper bound of the nonce space
    pub max_nonce: u64,
}

impl SearchConfig {
    /// `threads == 0` selects one worker per logical processor.
    pub fn new(threads: usize, difficulty: Difficulty) -> Self {
        let workers = if threads == 0 { num_cpus::get() } else { threads };
        Self {
            workers,
            difficulty,
            max_nonce: u64::MAX,
        }
    }

    pub fn with_max_nonce(mut self, max_nonce: u64) -> Self {
        self.max_nonce = max_nonce;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(0, Difficulty::default())
    }
}

pub struct CpuMiner {
    config: SearchConfig,
}

impl CpuMiner {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn num_threads(&self) -> usize {
        self.config.workers
    }

    /// Search for a nonce whose digest meets the configured difficulty.
    ///
    /// Returns the first solution any worker discovers, which is not
    /// necessarily the smallest qualifying nonce.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchReport, MinerError> {
        let workers = self.config.workers.max(1);
        if workers > MAX_THREADS {
            return Err(MinerError::TooManyWorkers {
                requested: workers,
                max: MAX_THREADS,
            });
        }
        let difficulty = self.config.difficulty;
        let max_nonce = self.config.max_nonce;
        let stop = StopSignal::new();
        let start = Instant::now();

        debug!(target: LOG_TARGET,
            "Starting search with {} workers, {} zero bits, challenge {}",
            workers, difficulty.zero_bits(), hex::encode(request.challenge)
        );

        let joined = thread::scope(|scope| -> Result<Vec<thread::Result<WorkerOutput>>, MinerError> {
            let mut handles = Vec::with_capacity(workers);
            for worker_id in 0..workers {
                let stop = &stop;
                let spawned = thread::Builder::new()
                    .name(format!("search-{}", worker_id))
                    .spawn_scoped(scope, move || {
                        search_worker(worker_id, workers, max_nonce, request, difficulty, stop)
                    });
                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        error!(target: LOG_TARGET, "❌ Failed to spawn search worker {}: {}", worker_id, e);
                        stop.broadcast();
                        for handle in handles {
                            let _ = handle.join();
                        }
                        return Err(MinerError::Io { source: e });
                    }
                }
            }

            Ok(handles.into_iter().map(|handle| handle.join()).collect())
        })?;

        let mut attempts = 0u64;
        let mut winner = None;
        for (worker_id, result) in joined.into_iter().enumerate() {
            let output = result.map_err(|_| MinerError::WorkerPanicked(worker_id))?;
            attempts += output.attempts;
            match (winner, output.solution) {
                (None, found) => winner = found,
                (Some(previous), Some(extra)) => error!(target: LOG_TARGET,
                    "Workers {} and {} both reported a solution; keeping nonce {}",
                    previous.worker_id, extra.worker_id, previous.nonce
                ),
                (Some(_), None) => {}
            }
        }

        let outcome = match winner {
            Some(solution) => SearchOutcome::Found(solution),
            None => SearchOutcome::Exhausted,
        };
        let report = SearchReport {
            outcome,
            attempts,
            workers,
            elapsed: start.elapsed(),
        };

        match report.outcome {
            SearchOutcome::Found(solution) => info!(target: LOG_TARGET,
                "💎 Worker {} found nonce {} ({} attempts in {:.3}s)",
                solution.worker_id, solution.nonce, attempts, report.elapsed.as_secs_f64()
            ),
            SearchOutcome::Exhausted => info!(target: LOG_TARGET,
                "Nonce space 0..={} exhausted after {} attempts", max_nonce, attempts
            ),
        }

        Ok(report)
    }
}

/// Validate raw challenge/signer bytes and run one search.
pub fn search(challenge: &[u8], signer: &[u8], config: &SearchConfig) -> Result<SearchOutcome, MinerError> {
    let request = SearchRequest::new(challenge, signer)?;
    let report = CpuMiner::new(config.clone()).search(&request)?;
    Ok(report.outcome)
}


// Changelog:
// - v1.0.0 (2026-10-15): Initial scoped-thread search coordinator.
//   - Workers spawn through thread::Builder; spawn failures return MinerError::Io.
//   - Rejects worker counts above MAX_THREADS.
