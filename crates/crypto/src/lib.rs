//! Relaycheck Cryptography
//!
//! Ed25519 keys and signatures, relay proof digests, and the signature
//! verification capability consumed by the validators.

mod digest;
mod keys;
mod sign;
mod verifier;

pub use digest::*;
pub use keys::*;
pub use sign::*;
pub use verifier::*;
