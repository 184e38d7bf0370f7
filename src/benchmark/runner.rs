// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 1.0.0
//
// This file implements the hashrate benchmark. It drives the same hash loop as
// the search engine, without checking the predicate, for a fixed wall-clock
// window and aggregates the hash counts of every worker.

use crate::core::keccak::DIGEST_LEN;
use crate::core::{BenchmarkResult, CandidateBuffer, MinerError, SearchRequest, MAX_THREADS};
use crate::miner::signal::StopSignal;
use crate::miner::stats::thread_stats::{ThreadStats, PUBLISH_INTERVAL};
use crate::utils::format::FormatUtils;
use crossbeam::utils::CachePadded;
use log::{debug, error, info};
use sha3::Keccak256;
use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use sysinfo::System;

const LOG_TARGET: &str = "keccak_miner::runner";

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub thread_count: usize,
    pub duration: Duration,
    pub report_interval: Duration,
    pub request: SearchRequest,
}

/// Main benchmark runner
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(threads: usize, duration: Duration) -> Self {
        let actual_threads = if threads == 0 {
            num_cpus::get()
        } else {
            threads
        };
        Self {
            config: BenchmarkConfig {
                thread_count: actual_threads,
                duration,
                report_interval: Duration::from_secs(5),
                request: SearchRequest::benchmark_default(),
            },
        }
    }

    pub fn with_request(mut self, request: SearchRequest) -> Self {
        self.config.request = request;
        self
    }

    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.config.report_interval = interval;
        self
    }

    /// Blocks for the configured duration, then returns the aggregated result.
    pub fn run(&self) -> Result<BenchmarkResult, MinerError> {
        if self.config.duration.is_zero() {
            return Err(MinerError::InvalidDuration);
        }

        let thread_count = self.config.thread_count.max(1);
        if thread_count > MAX_THREADS {
            return Err(MinerError::TooManyWorkers {
                requested: thread_count,
                max: MAX_THREADS,
            });
        }
        info!(target: LOG_TARGET,
            "🧪 Starting benchmark with {} threads for {:.1}s",
            thread_count,
            self.config.duration.as_secs_f64()
        );
        log_host_info();

        let request = &self.config.request;
        let stop = StopSignal::new();
        let total_hashes = CachePadded::new(AtomicU64::new(0));
        let thread_stats: Vec<ThreadStats> = (0..thread_count).map(ThreadStats::new).collect();

        let start_time = Instant::now();
        let (measured, peak_hashrate, joined) = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(thread_count);
            for slot in &thread_stats {
                let stop = &stop;
                let total_hashes = &total_hashes;
                let spawned = thread::Builder::new()
                    .name(format!("bench-{}", slot.thread_id()))
                    .spawn_scoped(scope, move || benchmark_thread(request, stop, total_hashes, slot));
                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        error!(target: LOG_TARGET, "❌ Failed to spawn benchmark thread {}: {}", slot.thread_id(), e);
                        stop.broadcast();
                        for handle in handles {
                            let _ = handle.join();
                        }
                        return Err(MinerError::Io { source: e });
                    }
                }
            }

            let peak = self.report_progress(start_time, &thread_stats);

            stop.broadcast();
            let measured = start_time.elapsed();
            debug!(target: LOG_TARGET, "Signaled threads to stop");

            let joined: Vec<thread::Result<()>> = handles.into_iter().map(|handle| handle.join()).collect();
            Ok((measured, peak, joined))
        })?;

        for (thread_id, result) in joined.into_iter().enumerate() {
            result.map_err(|_| MinerError::WorkerPanicked(thread_id))?;
        }
        info!(target: LOG_TARGET, "✅ All threads stopped");

        let final_hashes = total_hashes.load(Ordering::Relaxed);
        Ok(BenchmarkResult {
            total_hashes: final_hashes,
            duration: measured,
            hashrate: BenchmarkResult::calculate_hashrate(final_hashes, measured),
            peak_hashrate,
            thread_count,
        })
    }

    /// Sleep until the window closes, logging interim rates. Returns the peak
    /// aggregate rate seen between two reports.
    fn report_progress(&self, start_time: Instant, thread_stats: &[ThreadStats]) -> f64 {
        let mut peak = 0.0f64;
        let mut last_hashes = 0u64;
        let mut last_time = start_time;

        loop {
            let elapsed = start_time.elapsed();
            if elapsed >= self.config.duration {
                break;
            }
            thread::sleep((self.config.duration - elapsed).min(self.config.report_interval));

            let now = Instant::now();
            let current_hashes = ThreadStats::sum(thread_stats);
            let time_delta = now.duration_since(last_time).as_secs_f64();
            if time_delta > 0.0 {
                let hashrate = current_hashes.saturating_sub(last_hashes) as f64 / time_delta;
                peak = peak.max(hashrate);
                info!(target: LOG_TARGET,
                    "📊 Progress: {} | Total: {} hashes",
                    FormatUtils::format_hashrate(hashrate),
                    FormatUtils::format_number(current_hashes)
                );
            }
            last_hashes = current_hashes;
            last_time = now;
        }

        peak
    }
}

/// Hash successive counter values until stopped, then fold the private count
/// into the shared total exactly once.
fn benchmark_thread(
    request: &SearchRequest,
    stop: &StopSignal,
    total_hashes: &AtomicU64,
    thread_stats: &ThreadStats,
) {
    let mut buffer = CandidateBuffer::new(request);
    let mut hasher = Keccak256::default();
    let mut digest = [0u8; DIGEST_LEN];
    let mut local_hash_count = 0u64;

    while !stop.is_set() {
        buffer.set_nonce(local_hash_count);
        buffer.digest_into(&mut hasher, &mut digest);
        black_box(&digest);
        local_hash_count = local_hash_count.wrapping_add(1);

        if local_hash_count % PUBLISH_INTERVAL == 0 {
            thread_stats.publish(local_hash_count);
        }
    }

    thread_stats.publish(local_hash_count);
    total_hashes.fetch_add(local_hash_count, Ordering::Relaxed);
    debug!(target: LOG_TARGET, "Thread {}: Terminated after {} hashes", thread_stats.thread_id(), local_hash_count);
}

fn log_host_info() {
    let mut system = System::new();
    system.refresh_cpu_all();
    let brand = system
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    info!(target: LOG_TARGET, "🖥️ CPU: {} ({} logical processors)", brand, system.cpus().len());
}

/// Measure sustained throughput in millions of hashes per second.
pub fn measure_rate(request: &SearchRequest, duration: Duration, threads: usize) -> Result<f64, MinerError> {
    let result = BenchmarkRunner::new(threads, duration)
        .with_request(*request)
        .run()?;
    Ok(result.mega_hashes_per_second())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_rejected() {
        let runner = BenchmarkRunner::new(1, Duration::ZERO);
        assert!(matches!(runner.run(), Err(MinerError::InvalidDuration)));
    }

    #[test]
    fn test_thread_count_bound() {
        let runner = BenchmarkRunner::new(MAX_THREADS + 1, Duration::from_millis(10));
        assert!(matches!(
            runner.run(),
            Err(MinerError::TooManyWorkers { max: MAX_THREADS, .. })
        ));
    }

    #[test]
    fn test_short_run_counts_hashes() {
        let result = BenchmarkRunner::new(2, Duration::from_millis(200))
            .with_report_interval(Duration::from_millis(50))
            .run()
            .unwrap();

        assert_eq!(result.thread_count, 2);
        assert!(result.total_hashes > 0);
        assert!(result.duration >= Duration::from_millis(200));
        assert!(result.hashrate > 0.0);
        let expected = result.total_hashes as f64 / result.duration.as_secs_f64() / 1_000_000.0;
        assert!((result.mega_hashes_per_second() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_measure_rate_positive() {
        let rate = measure_rate(&SearchRequest::benchmark_default(), Duration::from_millis(100), 1).unwrap();
        assert!(rate > 0.0);
    }
}

// Changelog:
// - v1.0.0 (2026-10-15): Initial time-boxed benchmark and measure_rate.
//   - Named benchmark threads; spawn failures return MinerError::Io.
//   - Rejects thread counts above MAX_THREADS.
