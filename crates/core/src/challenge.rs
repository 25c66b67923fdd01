//! Challenge requests
//!
//! A challenge disputes a single servicer's response (the minority) by
//! presenting responses from other servicers for the same relay that agree
//! with each other (the majority).

use serde::{Deserialize, Serialize};

use crate::relay::RelayResponse;

/// Number of agreeing relays a well-formed challenge carries.
pub const MAJORITY_SIZE: usize = 2;

/// Relay responses alleged to agree with each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorityResponse {
    pub relays: Vec<RelayResponse>,
}

impl MajorityResponse {
    pub fn new(relays: Vec<RelayResponse>) -> Self {
        Self { relays }
    }

    pub fn len(&self) -> usize {
        self.relays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relays.is_empty()
    }
}

/// A dispute of one dissenting response against a majority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub minority_response: RelayResponse,
    pub majority_response: MajorityResponse,
}

impl ChallengeRequest {
    pub fn new(minority_response: RelayResponse, majority_response: MajorityResponse) -> Self {
        Self {
            minority_response,
            majority_response,
        }
    }
}
