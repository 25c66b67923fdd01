//! Relaycheck Core Types
//!
//! This crate defines the relay proofs, relay responses, challenges and
//! query results consumed by the relaycheck validators.

mod challenge;
mod encoding;
mod error;
mod query;
mod relay;
mod staking;

pub use challenge::*;
pub use encoding::*;
pub use error::*;
pub use query::*;
pub use relay::*;
pub use staking::*;
