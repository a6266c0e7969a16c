use std::time::Duration;

/// Seed combined with the payer key and program id to derive the greeting account
pub const GREETING_SEED: &str = "hello";

/// Fixed estimate of the fees the workflow's transactions will cost
pub const FEE_ALLOWANCE_LAMPORTS: u64 = 50_000;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";

pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_CONFIRM_POLL_INTERVAL: Duration = Duration::from_millis(500);
