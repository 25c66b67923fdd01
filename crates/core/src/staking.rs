use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CoreError;

/// Staking status of an application or node, as reported by query RPCs.
///
/// Serialized as its numeric wire code. Decoding accepts any integer and
/// goes through [`StakingStatus::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "i64")]
pub enum StakingStatus {
    Unstaking,
    Staked,
}

impl StakingStatus {
    pub fn code(&self) -> u8 {
        match self {
            StakingStatus::Unstaking => 1,
            StakingStatus::Staked => 2,
        }
    }

    /// Strict mapping from a wire code.
    pub fn try_from_code(code: i64) -> Result<Self, CoreError> {
        match code {
            1 => Ok(StakingStatus::Unstaking),
            2 => Ok(StakingStatus::Staked),
            other => Err(CoreError::UnknownStakingStatus(other)),
        }
    }

    /// Lenient mapping from a wire code.
    ///
    /// Unknown codes map to `Unstaking`: an entity whose status cannot be
    /// read is treated as not staked.
    pub fn from_code(code: i64) -> Self {
        Self::try_from_code(code).unwrap_or_else(|_| {
            warn!("Unknown staking status code {}, treating as unstaking", code);
            StakingStatus::Unstaking
        })
    }
}

impl From<i64> for StakingStatus {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<StakingStatus> for u8 {
    fn from(status: StakingStatus) -> Self {
        status.code()
    }
}
