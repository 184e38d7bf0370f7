// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/cpu/thread.rs
// Version: 1.0.0
//
// This file contains the per-worker hash-and-test loop of the nonce search,
// located in the cpu subdirectory of the miner module. It handles nonce
// iteration, digest computation and winner detection for one worker.

use crate::core::keccak::DIGEST_LEN;
use crate::core::{CandidateBuffer, Difficulty, SearchRequest, Solution};
use crate::miner::signal::StopSignal;
use log::{debug, trace};
use sha3::Keccak256;
use std::iter::StepBy;
use std::ops::RangeInclusive;

const LOG_TARGET: &str = "keccak_miner::thread";

/// What a worker hands back to the coordinator when it terminates.
#[derive(Debug, Clone, Default)]
pub struct WorkerOutput {
    pub attempts: u64,
    /// Only the worker that won the stop signal carries a solution.
    pub solution: Option<Solution>,
}

/// Nonces owned by `worker_id`: `worker_id, worker_id + workers, ...` up to and
/// including `max_nonce`. Over all ids in `0..workers` this partitions
/// `0..=max_nonce` without overlap or gaps, and never wraps the u64 width.
pub fn worker_nonces(worker_id: usize, workers: usize, max_nonce: u64) -> StepBy<RangeInclusive<u64>> {
    (worker_id as u64..=max_nonce).step_by(workers.max(1))
}

pub fn search_worker(
    worker_id: usize,
    workers: usize,
    max_nonce: u64,
    request: &SearchRequest,
    difficulty: Difficulty,
    stop: &StopSignal,
) -> WorkerOutput {
    let mut buffer = CandidateBuffer::new(request);
    let mut hasher = Keccak256::default();
    let mut digest = [0u8; DIGEST_LEN];
    let mut attempts = 0u64;

    trace!(target: LOG_TARGET, "Worker {}: started, stride {}", worker_id, workers);

    for nonce in worker_nonces(worker_id, workers, max_nonce) {
        if stop.is_set() {
            return WorkerOutput { attempts, solution: None };
        }

        buffer.set_nonce(nonce);
        buffer.digest_into(&mut hasher, &mut digest);
        attempts += 1;

        if difficulty.is_met(&digest) {
            if !stop.try_claim() {
                debug!(target: LOG_TARGET, "Worker {}: nonce {} qualified after another worker won", worker_id, nonce);
                return WorkerOutput { attempts, solution: None };
            }

            debug!(target: LOG_TARGET,
                "Worker {}: found nonce {} after {} attempts, digest {}",
                worker_id, nonce, attempts, hex::encode(digest)
            );
            return WorkerOutput {
                attempts,
                solution: Some(Solution {
                    nonce,
                    digest,
                    worker_id,
                }),
            };
        }
    }

    debug!(target: LOG_TARGET, "Worker {}: nonce range exhausted after {} attempts", worker_id, attempts);
    WorkerOutput { attempts, solution: None }
}


// Changelog:
// - v1.0.0 (2026-10-15): Initial strided nonce partition and worker loop.
