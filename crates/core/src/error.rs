use thiserror::Error;

/// Reason a proof, relay response or challenge was rejected.
///
/// Validators stop at the first violated invariant, so a single value
/// describes the whole outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid chain. The chain cannot be empty")]
    EmptyChain,

    #[error("Invalid entropy. The entropy needs to be a number: {0}")]
    InvalidEntropy(String),

    #[error("Invalid string is not hex: {0}")]
    InvalidHex(String),

    #[error("The Block Height needs to be bigger than 0")]
    InvalidBlockHeight(i64),

    #[error("The token is invalid")]
    InvalidToken,

    #[error("Invalid majority request. The amount of relays needs to be equals to {expected}, got {actual}")]
    InvalidMajorityCount { expected: usize, actual: usize },

    #[error("Relay signature verification failed")]
    SignatureVerificationFailure,

    #[error("Proof canonicalization failed: {0}")]
    Canonicalization(String),
}

/// Errors raised while building or decoding core domain objects.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    #[error("Unknown staking status code: {0}")]
    UnknownStakingStatus(i64),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_chain() {
        let err = ValidationError::EmptyChain;
        assert_eq!(err.to_string(), "Invalid chain. The chain cannot be empty");
    }

    #[test]
    fn test_error_display_invalid_entropy() {
        let err = ValidationError::InvalidEntropy("abc".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid entropy. The entropy needs to be a number: abc"
        );
    }

    #[test]
    fn test_error_display_invalid_hex() {
        let err = ValidationError::InvalidHex("zz".to_string());
        assert_eq!(err.to_string(), "Invalid string is not hex: zz");
    }

    #[test]
    fn test_error_display_invalid_block_height() {
        let err = ValidationError::InvalidBlockHeight(0);
        assert_eq!(err.to_string(), "The Block Height needs to be bigger than 0");
    }

    #[test]
    fn test_error_display_invalid_majority_count() {
        let err = ValidationError::InvalidMajorityCount {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid majority request. The amount of relays needs to be equals to 2, got 3"
        );
    }

    #[test]
    fn test_core_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_error_is_debug() {
        let err = ValidationError::InvalidToken;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidToken"));
    }
}
