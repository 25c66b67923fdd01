//! Signature verification capability handed to validators

use std::sync::Arc;

use async_trait::async_trait;

use crate::sign::verify_signature;

/// Checks a signature over a payload under a public key.
///
/// Implementations may suspend (for example while looking up key material)
/// but never fail: anything that prevents verification is `false`.
#[async_trait]
pub trait SignatureVerifier: Send + Sync {
    async fn verify_signature(&self, public_key: &[u8], payload: &[u8], signature: &[u8]) -> bool;
}

/// Stateless Ed25519 verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

#[async_trait]
impl SignatureVerifier for Ed25519Verifier {
    async fn verify_signature(&self, public_key: &[u8], payload: &[u8], signature: &[u8]) -> bool {
        verify_signature(public_key, payload, signature)
    }
}

#[async_trait]
impl<V: SignatureVerifier + ?Sized> SignatureVerifier for Arc<V> {
    async fn verify_signature(&self, public_key: &[u8], payload: &[u8], signature: &[u8]) -> bool {
        (**self).verify_signature(public_key, payload, signature).await
    }
}
