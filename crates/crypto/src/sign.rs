use ed25519_dalek::{Signature, Signer, Verifier, VerifyingKey};

use crate::keys::SigningKeypair;

/// Sign data with a signing keypair
pub fn sign_data(keypair: &SigningKeypair, data: &[u8]) -> [u8; 64] {
    let signature: Signature = keypair.signing_key.sign(data);
    signature.to_bytes()
}

/// Verify an Ed25519 signature.
///
/// Keys and signatures arrive as decoded wire bytes, so wrong lengths and
/// malformed keys are reported as a failed verification.
pub fn verify_signature(pubkey: &[u8], data: &[u8], signature: &[u8]) -> bool {
    let Ok(pubkey) = <&[u8; 32]>::try_from(pubkey) else {
        return false;
    };
    let Ok(signature) = <&[u8; 64]>::try_from(signature) else {
        return false;
    };

    let verifying_key = match VerifyingKey::from_bytes(pubkey) {
        Ok(vk) => vk,
        Err(_) => return false,
    };

    let signature = Signature::from_bytes(signature);

    verifying_key.verify(data, &signature).is_ok()
}
