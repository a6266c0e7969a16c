use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// SDK-specific error types for greeter operations
#[derive(Debug, Error)]
pub enum GreeterError {
    /// Endpoint unreachable or incompatible
    #[error("Connection error: {0}")]
    Connection(String),

    /// Malformed input supplied before the workflow starts
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Payer balance could not be raised to the required minimum
    #[error("Insufficient funds: payer {payer} holds {balance} lamports, {required} required")]
    InsufficientFunds {
        payer: Pubkey,
        balance: u64,
        required: u64,
    },

    /// No account exists at the program id
    #[error("Program {0} has not been deployed")]
    ProgramNotFound(Pubkey),

    /// Account exists at the program id but is not executable
    #[error("Program {0} is not executable")]
    NotExecutable(Pubkey),

    /// Greeting account creation failed
    #[error("Failed to create greeting account {address}: {reason}")]
    Provision { address: Pubkey, reason: String },

    /// Transaction rejected or confirmation timed out
    #[error("Transaction submission failed: {0}")]
    Submission(String),

    /// Account not found on-chain
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Account data does not match the fixed greeting layout
    #[error("Invalid account data: expected {expected} bytes, found {actual}")]
    Decode { expected: usize, actual: usize },
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, GreeterError>;
