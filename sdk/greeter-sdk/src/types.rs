use std::fmt::Display;

use serde::{Serialize, Serializer};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

/// Outcome of provisioning the greeting account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionedAccount {
    /// Derived greeting account address
    pub address: Pubkey,

    /// Whether this call created the account
    pub created: bool,
}

/// Final report of a workflow run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingReport {
    #[serde(serialize_with = "as_display")]
    pub payer: Pubkey,

    #[serde(serialize_with = "as_display")]
    pub program_id: Pubkey,

    /// Greeting account the instruction targeted
    #[serde(serialize_with = "as_display")]
    pub greeted_account: Pubkey,

    /// Whether the greeting account was created during this run
    pub account_created: bool,

    /// Payer balance after funding, in lamports
    pub payer_balance: u64,

    /// Signature of the greeting transaction
    #[serde(serialize_with = "as_display")]
    pub signature: Signature,

    /// Counter value read back after the greeting
    pub counter: u32,

    /// Version reported by the node at connection time
    pub node_version: String,
}

impl Display for GreetingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Account {} has been greeted {} time(s)",
            self.greeted_account, self.counter
        )
    }
}

fn as_display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
