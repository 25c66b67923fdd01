//! Relaycheck Validator
//!
//! Decides whether relay proofs, servicer-signed relay responses and
//! challenges built from them are well-formed and authentic.
//!
//! ## Validation order
//!
//! 1. **Proof**: chain, entropy, signature hex, servicer key hex, block
//!    height, access token. Standalone, no signature checks.
//! 2. **Relay response**: signature hex, then the servicer signature over the
//!    SHA3-256 digest of the proof's canonical form.
//! 3. **Challenge**: minority response, majority size, majority relays.
//!
//! Each step returns the first violated invariant.

mod config;
mod proof;
mod validator;

pub use config::{MajorityPolicy, ValidatorConfig};
pub use proof::validate_relay_proof;
pub use validator::ChallengeValidator;
