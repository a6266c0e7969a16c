use std::time::Duration;

use log::info;
use solana_sdk::account::Account;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;

use crate::core::connection::SolConnection;
use crate::error::{GreeterError, Result};

//=============================================================================
// Address Derivation
//=============================================================================

/// Derive the greeting account address from the payer key, a seed and the
/// owning program.
///
/// The result depends only on its inputs: the same triple always yields the
/// same address, and a different owner yields a different address for the same
/// base and seed.
pub fn derive_greeting_address(base: &Pubkey, seed: &str, program_id: &Pubkey) -> Result<Pubkey> {
    Pubkey::create_with_seed(base, seed, program_id).map_err(|e| {
        GreeterError::Configuration(format!(
            "cannot derive address from seed {:?} for program {}: {}",
            seed, program_id, e
        ))
    })
}

//=============================================================================
// Account Fetching
//=============================================================================

/// Fetch an account, mapping transport failures to [`GreeterError::Connection`]
pub async fn fetch_account(
    connection: &impl SolConnection,
    pubkey: &Pubkey,
) -> Result<Option<Account>> {
    connection
        .get_account(pubkey)
        .await
        .map_err(|e| GreeterError::Connection(e.to_string()))
}

/// Fetch an account's data, failing if the account does not exist
pub async fn fetch_account_data(connection: &impl SolConnection, pubkey: &Pubkey) -> Result<Vec<u8>> {
    let account = fetch_account(connection, pubkey)
        .await?
        .ok_or(GreeterError::AccountNotFound(*pubkey))?;

    Ok(account.data)
}

pub async fn fetch_rent_exempt_minimum(
    connection: &impl SolConnection,
    data_len: usize,
) -> Result<u64> {
    connection
        .get_minimum_balance_for_rent_exemption(data_len)
        .await
        .map_err(|e| GreeterError::Connection(e.to_string()))
}

pub async fn fetch_balance(connection: &impl SolConnection, pubkey: &Pubkey) -> Result<u64> {
    connection
        .get_balance(pubkey)
        .await
        .map_err(|e| GreeterError::Connection(e.to_string()))
}

//=============================================================================
// Transaction Submission
//=============================================================================

/// Sign `instructions` with `payer` and submit them as one transaction,
/// waiting at most `timeout` for confirmation.
pub async fn send_and_confirm(
    connection: &impl SolConnection,
    payer: &Keypair,
    instructions: &[Instruction],
    timeout: Duration,
) -> Result<Signature> {
    let blockhash = connection
        .get_latest_blockhash()
        .await
        .map_err(|e| GreeterError::Submission(format!("failed to fetch blockhash: {}", e)))?;

    let mut tx = Transaction::new_with_payer(instructions, Some(&payer.pubkey()));
    tx.try_sign(&[payer], blockhash)
        .map_err(|e| GreeterError::Submission(format!("failed to sign transaction: {}", e)))?;

    let signature = tokio::time::timeout(timeout, connection.send_transaction(&tx))
        .await
        .map_err(|_| {
            GreeterError::Submission(format!("confirmation timed out after {:?}", timeout))
        })?
        .map_err(|e| GreeterError::Submission(e.to_string()))?;

    info!("Transaction {} confirmed", signature);
    Ok(signature)
}
