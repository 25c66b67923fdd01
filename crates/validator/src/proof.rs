//! Structural checks on a single relay proof

use relaycheck_core::{is_hex, RelayProof, ValidationError};

/// Validate a relay proof.
///
/// Checks run in a fixed order and the first violation is returned:
/// chain, entropy, signature, servicer key, block height, token.
pub fn validate_relay_proof(proof: &RelayProof) -> Result<(), ValidationError> {
    if proof.blockchain.is_empty() {
        return Err(ValidationError::EmptyChain);
    }
    if !proof.entropy_is_numeric() {
        return Err(ValidationError::InvalidEntropy(proof.entropy.clone()));
    }
    if !is_hex(&proof.signature) {
        return Err(ValidationError::InvalidHex(proof.signature.clone()));
    }
    if !is_hex(&proof.servicer_pub_key) {
        return Err(ValidationError::InvalidHex(proof.servicer_pub_key.clone()));
    }
    if proof.session_block_height <= 0 {
        return Err(ValidationError::InvalidBlockHeight(proof.session_block_height));
    }
    if !proof.token.is_valid() {
        return Err(ValidationError::InvalidToken);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relaycheck_core::AccessToken;

    fn valid_proof() -> RelayProof {
        RelayProof {
            blockchain: "0021".to_string(),
            entropy: "3257346".to_string(),
            session_block_height: 1,
            servicer_pub_key: "ab".repeat(32),
            signature: "cd".repeat(64),
            token: AccessToken::new("0.0.1", "01".repeat(32), "02".repeat(32), "03".repeat(64)),
            request_hash: String::new(),
        }
    }

    #[test]
    fn test_valid_proof() {
        assert_eq!(validate_relay_proof(&valid_proof()), Ok(()));
    }

    #[test]
    fn test_empty_chain() {
        let mut proof = valid_proof();
        proof.blockchain.clear();
        assert_eq!(validate_relay_proof(&proof), Err(ValidationError::EmptyChain));
    }

    #[test]
    fn test_empty_chain_reported_before_block_height() {
        let mut proof = valid_proof();
        proof.blockchain.clear();
        proof.session_block_height = 0;
        assert_eq!(validate_relay_proof(&proof), Err(ValidationError::EmptyChain));
    }

    #[test]
    fn test_non_numeric_entropy() {
        let mut proof = valid_proof();
        proof.entropy = "random".to_string();
        assert_eq!(
            validate_relay_proof(&proof),
            Err(ValidationError::InvalidEntropy("random".to_string()))
        );
    }

    #[test]
    fn test_numeric_entropy_forms_accepted() {
        for entropy in ["1.5", "1e3", "340282366920938463463374607431768211456"] {
            let mut proof = valid_proof();
            proof.entropy = entropy.to_string();
            assert_eq!(validate_relay_proof(&proof), Ok(()), "entropy {}", entropy);
        }
    }

    #[test]
    fn test_signature_not_hex() {
        let mut proof = valid_proof();
        proof.signature = "xyz".to_string();
        assert_eq!(
            validate_relay_proof(&proof),
            Err(ValidationError::InvalidHex("xyz".to_string()))
        );
    }

    #[test]
    fn test_servicer_pub_key_not_hex() {
        let mut proof = valid_proof();
        proof.servicer_pub_key = "abc".to_string();
        assert_eq!(
            validate_relay_proof(&proof),
            Err(ValidationError::InvalidHex("abc".to_string()))
        );
    }

    #[test]
    fn test_signature_checked_before_servicer_key() {
        let mut proof = valid_proof();
        proof.signature = "sig".to_string();
        proof.servicer_pub_key = "key".to_string();
        assert_eq!(
            validate_relay_proof(&proof),
            Err(ValidationError::InvalidHex("sig".to_string()))
        );
    }

    #[test]
    fn test_zero_block_height() {
        let mut proof = valid_proof();
        proof.session_block_height = 0;
        assert_eq!(
            validate_relay_proof(&proof),
            Err(ValidationError::InvalidBlockHeight(0))
        );
    }

    #[test]
    fn test_negative_block_height() {
        let mut proof = valid_proof();
        proof.session_block_height = -4;
        assert_eq!(
            validate_relay_proof(&proof),
            Err(ValidationError::InvalidBlockHeight(-4))
        );
    }

    #[test]
    fn test_invalid_token() {
        let mut proof = valid_proof();
        proof.token.version.clear();
        assert_eq!(validate_relay_proof(&proof), Err(ValidationError::InvalidToken));
    }
}
