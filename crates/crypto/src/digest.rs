//! Relay proof digests
//!
//! Servicers sign the SHA3-256 digest of a proof's canonical form. The digest
//! travels as lowercase hex and is decoded back to raw bytes before signature
//! verification, so the signed message is always the 32 decoded bytes.

use sha3::{Digest, Sha3_256};
use thiserror::Error;

use relaycheck_core::RelayProof;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("Canonicalization failed: {0}")]
    Canonicalization(#[from] serde_json::Error),
    #[error("Digest hex decode failed: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Hash data using SHA3-256
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hex rendering of the proof digest
pub fn proof_digest_hex(proof: &RelayProof) -> Result<String, DigestError> {
    let canonical = proof.canonical_bytes()?;
    Ok(hex::encode(sha3_256(&canonical)))
}

/// Bytes a servicer signs for `proof`
pub fn proof_digest(proof: &RelayProof) -> Result<Vec<u8>, DigestError> {
    let digest_hex = proof_digest_hex(proof)?;
    Ok(hex::decode(digest_hex)?)
}
