// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/integration_test.rs
// Version: 1.0.0
//
// This file contains integration tests for the keccak miner, located in the
// tests directory. It drives the public search API end to end and checks every
// returned nonce against an independently recomputed digest.
//
// Tree Location:
// - tests/integration_test.rs (integration tests)
// - Depends on: keccak-miner, sha3, rand

#[cfg(test)]
mod tests {
    use keccak_miner::core::keccak::digest_for_nonce;
    use keccak_miner::core::SearchReport;
    use keccak_miner::{search, CpuMiner, Difficulty, MinerError, SearchConfig, SearchOutcome, SearchRequest};
    use rand::Rng;
    use sha3::{Digest, Keccak256};

    fn config(workers: usize, zero_bits: u32) -> SearchConfig {
        SearchConfig::new(workers, Difficulty::new(zero_bits).unwrap())
    }

    fn random_request(rng: &mut impl Rng) -> SearchRequest {
        let mut challenge = [0u8; 32];
        let mut signer = [0u8; 16];
        rng.fill(&mut challenge);
        rng.fill(&mut signer);
        SearchRequest { challenge, signer }
    }

    /// Recompute the digest from scratch, without going through the crate's buffer type.
    fn verify_independently(request: &SearchRequest, nonce: u64) -> [u8; 32] {
        let mut buffer = Vec::with_capacity(72);
        buffer.extend_from_slice(&request.challenge);
        buffer.extend_from_slice(&request.signer);
        buffer.extend_from_slice(&[0u8; 16]);
        buffer.extend_from_slice(&nonce.to_le_bytes());
        Keccak256::digest(&buffer).into()
    }

    #[test]
    fn test_end_to_end_first_byte_zero() {
        let challenge: Vec<u8> = (0x01..=0x20).collect();
        let signer: Vec<u8> = (0x21..=0x30).collect();

        let outcome = search(&challenge, &signer, &config(4, 8)).unwrap();
        let nonce = outcome.nonce().expect("8-bit search should find a nonce");

        let request = SearchRequest::new(&challenge, &signer).unwrap();
        let digest = verify_independently(&request, nonce);
        assert_eq!(digest[0], 0, "first digest byte must be zero");
        assert_eq!(digest, digest_for_nonce(&request, nonce));
    }

    #[test]
    fn test_found_nonces_always_verify() {
        let mut rng = rand::thread_rng();
        for zero_bits in [1, 4, 8, 12] {
            let difficulty = Difficulty::new(zero_bits).unwrap();
            let request = random_request(&mut rng);
            let report: SearchReport = CpuMiner::new(SearchConfig::new(3, difficulty)).search(&request).unwrap();

            let nonce = report.outcome.nonce().unwrap();
            let digest = verify_independently(&request, nonce);
            assert!(difficulty.is_met(&digest), "{} bits: nonce {} does not verify", zero_bits, nonce);
            assert!(report.attempts >= 1);
        }
    }

    #[test]
    fn test_repeated_easy_searches_single_winner() {
        let mut rng = rand::thread_rng();
        for round in 0..200 {
            let zero_bits = rng.gen_range(1..=4);
            let workers = rng.gen_range(1..=8);
            let request = random_request(&mut rng);
            let difficulty = Difficulty::new(zero_bits).unwrap();

            let report = CpuMiner::new(SearchConfig::new(workers, difficulty)).search(&request).unwrap();
            let solution = match report.outcome {
                SearchOutcome::Found(solution) => solution,
                SearchOutcome::Exhausted => panic!("round {}: unbounded easy search exhausted", round),
            };
            assert!(solution.worker_id < workers);
            assert_eq!(solution.nonce % workers as u64, solution.worker_id as u64);
            assert_eq!(solution.digest, verify_independently(&request, solution.nonce));
            assert!(difficulty.is_met(&solution.digest));
        }
    }

    #[test]
    fn test_nonce_zero_versus_exhausted() {
        let difficulty = Difficulty::new(1).unwrap();
        let bounded = SearchConfig::new(1, difficulty).with_max_nonce(0);

        let mut qualifying = None;
        let mut failing = None;
        for tag in 0u8..=255 {
            let mut request = SearchRequest::benchmark_default();
            request.signer[0] = tag;
            if difficulty.is_met(&digest_for_nonce(&request, 0)) {
                qualifying.get_or_insert(request);
            } else {
                failing.get_or_insert(request);
            }
            if qualifying.is_some() && failing.is_some() {
                break;
            }
        }
        let (qualifying, failing) = (qualifying.unwrap(), failing.unwrap());

        let found = search(&qualifying.challenge, &qualifying.signer, &bounded).unwrap();
        assert_eq!(found.nonce(), Some(0));
        assert_eq!(found.into_nonce().unwrap(), 0);

        let exhausted = search(&failing.challenge, &failing.signer, &bounded).unwrap();
        assert_eq!(exhausted, SearchOutcome::Exhausted);
        assert!(matches!(exhausted.into_nonce(), Err(MinerError::Exhausted)));
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        let cfg = config(2, 8);
        let err = search(&[0u8; 31], &[0u8; 16], &cfg).unwrap_err();
        assert!(matches!(err, MinerError::InvalidLength { field: "challenge", expected: 32, actual: 31 }));

        let err = search(&[0u8; 32], &[0u8; 17], &cfg).unwrap_err();
        assert!(matches!(err, MinerError::InvalidLength { field: "signer", expected: 16, actual: 17 }));
    }

    #[test]
    fn test_hex_request_parsing() {
        let challenge = hex::encode((0x01..=0x20).collect::<Vec<u8>>());
        let signer = format!("0x{}", hex::encode((0x21..=0x30).collect::<Vec<u8>>()));
        let request = SearchRequest::from_hex(&challenge, &signer).unwrap();
        assert_eq!(request, SearchRequest::benchmark_default());

        assert!(matches!(
            SearchRequest::from_hex("zz", &signer),
            Err(MinerError::InvalidHex { field: "challenge", .. })
        ));
    }
}

// Changelog:
// - v1.0.0 (2026-10-15): Initial end-to-end search tests.
//   - Covers verification, single winner under repetition, nonce 0 and exhaustion.
