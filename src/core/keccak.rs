// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/keccak.rs
// Version: 1.0.0
//
// This file implements the digest function and the fixed-layout candidate
// buffer hashed on every attempt, located in the core subdirectory.
//
// Tree Location:
// - src/core/keccak.rs (digest + candidate buffer)
// - Depends on: sha3 crate

use crate::core::types::SearchRequest;
use sha3::digest::Output;
use sha3::{Digest, Keccak256};

pub const CHALLENGE_LEN: usize = 32;
pub const SIGNER_LEN: usize = 16;
pub const DIGEST_LEN: usize = 32;
pub const BUFFER_LEN: usize = 72;

/// Offset of the signer inside the candidate buffer. Bytes between the end of
/// the signer and `NONCE_OFFSET` stay zero.
pub const SIGNER_OFFSET: usize = 32;
pub const NONCE_OFFSET: usize = 64;

/// Byte order of the nonce field. Verifiers recompute the digest with the
/// nonce encoded little-endian, so both the search engine and the benchmark
/// harness write it this way.
pub const NONCE_BYTE_ORDER: &str = "little-endian";

/// Legacy Keccak-256 (original Keccak padding, not FIPS-202 SHA3-256).
pub fn keccak256(data: &[u8]) -> [u8; DIGEST_LEN] {
    let hash = Keccak256::digest(data);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hash);
    out
}

/// Per-worker scratch buffer: `challenge || signer || zero pad || nonce`.
#[derive(Debug, Clone)]
pub struct CandidateBuffer {
    bytes: [u8; BUFFER_LEN],
}

impl CandidateBuffer {
    pub fn new(request: &SearchRequest) -> Self {
        let mut bytes = [0u8; BUFFER_LEN];
        bytes[..CHALLENGE_LEN].copy_from_slice(&request.challenge);
        bytes[SIGNER_OFFSET..SIGNER_OFFSET + SIGNER_LEN].copy_from_slice(&request.signer);
        Self { bytes }
    }

    #[inline]
    pub fn set_nonce(&mut self, nonce: u64) {
        self.bytes[NONCE_OFFSET..].copy_from_slice(&nonce.to_le_bytes());
    }

    /// Hash the whole buffer into `out`, leaving `hasher` ready for reuse.
    #[inline]
    pub fn digest_into(&self, hasher: &mut Keccak256, out: &mut [u8; DIGEST_LEN]) {
        Digest::update(hasher, &self.bytes);
        hasher.finalize_into_reset(Output::<Keccak256>::from_mut_slice(out));
    }

    pub fn digest(&self) -> [u8; DIGEST_LEN] {
        keccak256(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.bytes
    }
}

/// Recompute the digest a verifier would see for `nonce`.
pub fn digest_for_nonce(request: &SearchRequest, nonce: u64) -> [u8; DIGEST_LEN] {
    let mut buffer = CandidateBuffer::new(request);
    buffer.set_nonce(nonce);
    buffer.digest()
}


// Changelog:
// - v1.0.0 (2026-10-15): Initial legacy Keccak-256 digest and 72-byte candidate buffer.
//   - digest_into writes into a fixed 32-byte array.
