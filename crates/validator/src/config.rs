//! Validator configuration

use serde::{Deserialize, Serialize};

use relaycheck_core::MAJORITY_SIZE;

/// How the relays of a majority response combine into one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MajorityPolicy {
    /// Every relay must validate; the first failing relay is reported
    #[default]
    AllMustPass,
    /// Only the last relay's outcome counts. Kept for compatibility with
    /// clients that validated majorities this way.
    LastWins,
}

/// Challenge validator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub majority_policy: MajorityPolicy,
    /// Exact number of relays a majority response must carry
    #[serde(default = "default_majority_size")]
    pub majority_size: usize,
}

fn default_majority_size() -> usize {
    MAJORITY_SIZE
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            majority_policy: MajorityPolicy::default(),
            majority_size: default_majority_size(),
        }
    }
}
