use std::time::Duration;

use clap::{Parser, ValueEnum};
use greeter_sdk::core::constants::{DEFAULT_RPC_URL, GREETING_SEED};
use greeter_sdk::WorkflowConfig;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

pub const DEFAULT_KEYPAIR_PATH: &str = "~/.config/solana/id.json";

/// Say hello to a deployed greeter program and report the greeting count.
#[derive(Debug, Parser)]
#[command(name = "greeter", version)]
pub struct Args {
    /// Base-58 id of the deployed greeter program
    pub program_id: Pubkey,

    /// JSON-RPC endpoint of the cluster
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub url: String,

    /// Keypair file of the fee payer
    #[arg(short, long, env = "KEYPAIR", default_value = DEFAULT_KEYPAIR_PATH)]
    pub keypair: String,

    #[arg(long, value_enum, default_value_t = Commitment::Confirmed)]
    pub commitment: Commitment,

    /// Seed used to derive the greeting account
    #[arg(long, default_value = GREETING_SEED)]
    pub seed: String,

    /// Maximum time to wait for any single confirmation
    #[arg(long, default_value_t = 30)]
    pub confirm_timeout_secs: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn keypair_path(&self) -> String {
        shellexpand::tilde(&self.keypair).into_owned()
    }

    pub fn workflow_config(&self) -> WorkflowConfig {
        WorkflowConfig {
            seed: self.seed.clone(),
            confirm_timeout: Duration::from_secs(self.confirm_timeout_secs),
            ..WorkflowConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM_ID: &str = "11111111111111111111111111111111";

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["greeter", PROGRAM_ID]).unwrap();
        assert_eq!(args.program_id, Pubkey::default());
        assert_eq!(args.commitment, Commitment::Confirmed);
        assert_eq!(args.output, OutputFormat::Text);
        assert_eq!(args.seed, "hello");
        assert_eq!(args.workflow_config().confirm_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_program_id_is_rejected() {
        assert!(Args::try_parse_from(["greeter"]).is_err());
    }

    #[test]
    fn test_malformed_program_id_is_rejected() {
        assert!(Args::try_parse_from(["greeter", "not-a-pubkey"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "greeter",
            PROGRAM_ID,
            "--url",
            "https://api.devnet.solana.com",
            "--commitment",
            "finalized",
            "--output",
            "json",
            "--confirm-timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(args.url, "https://api.devnet.solana.com");
        assert_eq!(
            CommitmentConfig::from(args.commitment),
            CommitmentConfig::finalized()
        );
        assert_eq!(args.output, OutputFormat::Json);
        assert_eq!(args.workflow_config().confirm_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_explicit_keypair_path() {
        let args = Args::try_parse_from(["greeter", PROGRAM_ID, "-k", "/tmp/payer.json"]).unwrap();
        assert_eq!(args.keypair_path(), "/tmp/payer.json");
    }
}
