//! Relay response, majority and challenge validation
//!
//! The validator owns an injected [`SignatureVerifier`]. Every check is an
//! early-exit cascade: the first violated invariant is the outcome.

use futures::future::join_all;
use tracing::{debug, warn};

use relaycheck_core::{
    is_hex, ChallengeRequest, MajorityResponse, RelayResponse, ValidationError,
};
use relaycheck_crypto::{proof_digest, SignatureVerifier};

use crate::config::{MajorityPolicy, ValidatorConfig};

/// Validates relay responses and the challenges built from them
pub struct ChallengeValidator<V> {
    config: ValidatorConfig,
    verifier: V,
}

impl<V: SignatureVerifier> ChallengeValidator<V> {
    /// Create a validator with the default configuration
    pub fn new(verifier: V) -> Self {
        Self::with_config(ValidatorConfig::default(), verifier)
    }

    pub fn with_config(config: ValidatorConfig, verifier: V) -> Self {
        Self { config, verifier }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate one relay response.
    ///
    /// The signature must be hex and must verify under the proof's servicer
    /// key over the SHA3-256 digest of the proof's canonical form.
    pub async fn validate_relay_response(
        &self,
        relay: &RelayResponse,
    ) -> Result<(), ValidationError> {
        let outcome = self.check_relay_response(relay).await;
        match &outcome {
            Ok(()) => debug!(
                "Relay response from {} verified",
                short_key(&relay.proof.servicer_pub_key)
            ),
            Err(e) => warn!(
                "Relay response from {} rejected: {}",
                short_key(&relay.proof.servicer_pub_key),
                e
            ),
        }
        outcome
    }

    async fn check_relay_response(&self, relay: &RelayResponse) -> Result<(), ValidationError> {
        if !is_hex(&relay.signature) {
            return Err(ValidationError::InvalidHex(relay.signature.clone()));
        }
        let servicer_pub_key = &relay.proof.servicer_pub_key;
        if !is_hex(servicer_pub_key) {
            return Err(ValidationError::InvalidHex(servicer_pub_key.clone()));
        }
        let pubkey = hex::decode(servicer_pub_key)
            .map_err(|_| ValidationError::InvalidHex(servicer_pub_key.clone()))?;
        let signature = hex::decode(&relay.signature)
            .map_err(|_| ValidationError::InvalidHex(relay.signature.clone()))?;
        let payload = proof_digest(&relay.proof)
            .map_err(|e| ValidationError::Canonicalization(e.to_string()))?;

        if !self
            .verifier
            .verify_signature(&pubkey, &payload, &signature)
            .await
        {
            return Err(ValidationError::SignatureVerificationFailure);
        }
        Ok(())
    }

    /// Validate the relays of a majority response under the configured policy.
    ///
    /// An empty majority validates; its size is checked by
    /// [`validate_challenge_request`](Self::validate_challenge_request).
    pub async fn validate_majority_response(
        &self,
        majority: &MajorityResponse,
    ) -> Result<(), ValidationError> {
        match self.config.majority_policy {
            MajorityPolicy::AllMustPass => {
                // Verified concurrently, reported in list order
                let outcomes = join_all(
                    majority
                        .relays
                        .iter()
                        .map(|relay| self.validate_relay_response(relay)),
                )
                .await;
                outcomes.into_iter().collect()
            }
            MajorityPolicy::LastWins => {
                let mut outcome = Ok(());
                for relay in &majority.relays {
                    outcome = self.validate_relay_response(relay).await;
                }
                outcome
            }
        }
    }

    /// Validate a challenge request.
    ///
    /// Order: minority response, majority size, majority relays.
    pub async fn validate_challenge_request(
        &self,
        request: &ChallengeRequest,
    ) -> Result<(), ValidationError> {
        if let Err(e) = self
            .validate_relay_response(&request.minority_response)
            .await
        {
            warn!("Challenge rejected: minority response invalid");
            return Err(e);
        }

        let actual = request.majority_response.len();
        if actual != self.config.majority_size {
            warn!(
                "Challenge rejected: majority carries {} relays, expected {}",
                actual, self.config.majority_size
            );
            return Err(ValidationError::InvalidMajorityCount {
                expected: self.config.majority_size,
                actual,
            });
        }

        if let Err(e) = self
            .validate_majority_response(&request.majority_response)
            .await
        {
            warn!("Challenge rejected: majority response invalid");
            return Err(e);
        }

        debug!("Challenge request accepted");
        Ok(())
    }
}

fn short_key(key: &str) -> &str {
    key.get(..16).unwrap_or(key)
}
