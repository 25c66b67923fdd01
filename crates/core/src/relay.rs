//! Relay proofs and servicer-signed relay responses
//!
//! A `RelayProof` is the servicer's claim that it answered a relay. A
//! `RelayResponse` wraps the proof with the servicer's signature over the
//! SHA3-256 digest of the proof's canonical form.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::encoding::is_hex;

/// Application access token embedded in every relay proof.
///
/// The token authorizes a client key to spend relays on behalf of an
/// application. It only checks its own shape; signature checks on the token
/// belong to the key-management side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub version: String,
    pub app_pub_key: String,
    pub client_pub_key: String,
    /// Empty until the application signs the token
    #[serde(default)]
    pub signature: String,
}

impl AccessToken {
    pub fn new(
        version: impl Into<String>,
        app_pub_key: impl Into<String>,
        client_pub_key: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            app_pub_key: app_pub_key.into(),
            client_pub_key: client_pub_key.into(),
            signature: signature.into(),
        }
    }

    /// Version present, both keys hex, signature either absent or hex.
    pub fn is_valid(&self) -> bool {
        !self.version.is_empty()
            && is_hex(&self.app_pub_key)
            && is_hex(&self.client_pub_key)
            && (self.signature.is_empty() || is_hex(&self.signature))
    }
}

/// A servicer's claim to have served a specific relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayProof {
    /// Target chain identifier
    pub blockchain: String,
    /// Client-chosen nonce. Kept as text so an unparseable value can be
    /// reported instead of being lost during decoding.
    #[serde(deserialize_with = "number_or_string")]
    pub entropy: String,
    pub session_block_height: i64,
    /// Hex-encoded servicer public key
    pub servicer_pub_key: String,
    /// Hex-encoded client signature over the relay request
    pub signature: String,
    #[serde(rename = "aat")]
    pub token: AccessToken,
    /// Hex digest of the relay request, empty when not tracked
    #[serde(default)]
    pub request_hash: String,
}

/// Field order of this view is the canonical order. Reordering fields here
/// changes every digest.
#[derive(Serialize)]
struct CanonicalProof<'a> {
    entropy: &'a str,
    session_block_height: i64,
    servicer_pub_key: &'a str,
    blockchain: &'a str,
    aat: CanonicalToken<'a>,
    signature: &'a str,
    request_hash: &'a str,
}

#[derive(Serialize)]
struct CanonicalToken<'a> {
    version: &'a str,
    app_pub_key: &'a str,
    client_pub_key: &'a str,
    signature: &'a str,
}

impl RelayProof {
    /// Deterministic serialized form used as the hashing input.
    ///
    /// Compact JSON with a fixed key order, independent of how the proof
    /// was decoded.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        let canonical = CanonicalProof {
            entropy: &self.entropy,
            session_block_height: self.session_block_height,
            servicer_pub_key: &self.servicer_pub_key,
            blockchain: &self.blockchain,
            aat: CanonicalToken {
                version: &self.token.version,
                app_pub_key: &self.token.app_pub_key,
                client_pub_key: &self.token.client_pub_key,
                signature: &self.token.signature,
            },
            signature: &self.signature,
            request_hash: &self.request_hash,
        };
        serde_json::to_vec(&canonical)
    }

    /// Whether the entropy reads as a finite number.
    ///
    /// Integers of any width are accepted, as are decimals and exponents.
    pub fn entropy_is_numeric(&self) -> bool {
        let digits = self.entropy.strip_prefix('-').unwrap_or(&self.entropy);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return true;
        }
        self.entropy.parse::<f64>().map_or(false, f64::is_finite)
    }
}

/// A signed assertion from a servicer that it honored `proof`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub proof: RelayProof,
    /// Hex-encoded servicer signature over the proof digest
    pub signature: String,
    /// Response body returned to the client; not covered by `signature`
    #[serde(default)]
    pub payload: String,
}

impl RelayResponse {
    pub fn new(proof: RelayProof, signature: impl Into<String>) -> Self {
        Self {
            proof,
            signature: signature.into(),
            payload: String::new(),
        }
    }
}

/// Wire clients send entropy either as a JSON number or as a string.
/// Numbers keep their exact source digits.
fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::String(s) => Ok(s),
        other => Err(D::Error::custom(format!(
            "entropy must be a number or string, got {}",
            other
        ))),
    }
}
