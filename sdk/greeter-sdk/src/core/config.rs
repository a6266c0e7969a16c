use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    DEFAULT_CONFIRM_POLL_INTERVAL, DEFAULT_CONFIRM_TIMEOUT, FEE_ALLOWANCE_LAMPORTS, GREETING_SEED,
};

/// Tunables for a greeting workflow run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Seed used to derive the greeting account from the payer key
    pub seed: String,

    /// Lamports reserved for transaction fees on top of the rent-exempt minimum
    pub fee_allowance_lamports: u64,

    /// Upper bound on every confirmation wait (airdrop and submissions)
    pub confirm_timeout: Duration,

    /// Delay between airdrop confirmation polls
    pub confirm_poll_interval: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            seed: GREETING_SEED.to_string(),
            fee_allowance_lamports: FEE_ALLOWANCE_LAMPORTS,
            confirm_timeout: DEFAULT_CONFIRM_TIMEOUT,
            confirm_poll_interval: DEFAULT_CONFIRM_POLL_INTERVAL,
        }
    }
}
