// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 1.0.0
//
// This file is the entry point of the keccak-miner binary. It parses the
// command line, initializes logging and dispatches to the mining service
// (default), the hashrate benchmark (--benchmark) or a one-shot search (--solve).
//
// Tree Location:
// - src/main.rs (binary entry point)
// - Depends on: keccak_miner library, clap, tokio, tracing-subscriber

use clap::Parser;
use keccak_miner::{
    Result,
    benchmark::BenchmarkRunner,
    core::{Args, Difficulty, SearchRequest, keccak::NONCE_BYTE_ORDER},
    miner::cpu::{CpuMiner, SearchConfig},
    utils::format::FormatUtils,
    web_server::{self, ServiceConfig},
};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    init_logging();

    let difficulty = Difficulty::new(args.difficulty_bits)?;

    if args.benchmark {
        handle_benchmark(&args).await
    } else if args.solve {
        handle_solve(&args, difficulty).await
    } else {
        handle_serve(&args, difficulty).await
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn handle_serve(args: &Args, difficulty: Difficulty) -> Result<()> {
    info!("🚀 Starting keccak-miner service");
    info!("🔢 Nonce encoding: {} u64 at offset 64", NONCE_BYTE_ORDER);

    let config = ServiceConfig {
        bind: args.bind.parse()?,
        allowed_origin: args.allowed_origin.clone(),
        search: SearchConfig::new(args.threads, difficulty),
    };

    web_server::start_web_server(config).await?;
    Ok(())
}

async fn handle_solve(args: &Args, difficulty: Difficulty) -> Result<()> {
    let (Some(challenge), Some(signer)) = (&args.challenge, &args.signer) else {
        return Err("--solve requires both --challenge and --signer".into());
    };
    let request = SearchRequest::from_hex(challenge, signer)?;
    let miner = CpuMiner::new(SearchConfig::new(args.threads, difficulty));

    info!("🔍 Solving with {} threads, {} zero bits", miner.num_threads(), difficulty.zero_bits());
    info!("🎯 Expected ~{} hashes", FormatUtils::format_number(difficulty.expected_attempts() as u64));
    let report = tokio::task::spawn_blocking(move || miner.search(&request)).await??;
    let nonce = report.outcome.into_nonce()?;

    info!("⏱️ Elapsed: {}", FormatUtils::format_duration(report.elapsed));
    info!("📈 Attempts: {}", report.attempts);
    info!("⚡ Search hashrate: {}", FormatUtils::format_hashrate(report.hashrate()));
    println!("{}", nonce);

    Ok(())
}

async fn handle_benchmark(args: &Args) -> Result<()> {
    info!("🧪 Starting Benchmark Mode");
    info!("🧵 Threads: {}", if args.threads == 0 { "auto".to_string() } else { args.threads.to_string() });
    info!("⏱️ Duration: {}s", args.benchmark_duration);

    let runner = BenchmarkRunner::new(args.threads, Duration::from_secs(args.benchmark_duration));
    let result = tokio::task::spawn_blocking(move || runner.run()).await??;

    info!("📊 Benchmark Complete!");
    info!("⏱️ Duration: {:.2}s", result.duration.as_secs_f64());
    info!("⚡ Average hashrate: {}", result.format_hashrate());
    info!("🔥 Peak hashrate: {}", FormatUtils::format_hashrate(result.peak_hashrate));
    info!("📈 Total hashes: {}", result.total_hashes);
    info!("🧵 Threads used: {}", result.thread_count);
    println!("hash: {:.2} MH/s", result.mega_hashes_per_second());

    Ok(())
}

// Changelog:
// - v1.0.0 (2026-10-15): Initial binary entry point.
//   - Serve, --benchmark and --solve modes dispatched from validated Args.
//   - Logging through tracing-subscriber with RUST_LOG support.
