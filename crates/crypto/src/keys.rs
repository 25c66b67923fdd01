use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;

/// Servicer keypair (Ed25519)
pub struct SigningKeypair {
    pub signing_key: SigningKey,
    pub verifying_key: VerifyingKey,
}

impl SigningKeypair {
    /// Generate a new random servicer keypair
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    /// Public key in the hex form carried by relay proofs
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }
}
