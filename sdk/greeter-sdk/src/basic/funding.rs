use std::time::Duration;

use log::{debug, info, warn};
use tokio::time::Instant;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::core::connection::SolConnection;
use crate::error::{GreeterError, Result};
use crate::state::GREETING_SIZE;
use crate::utils;

/// Lamports the payer needs for one run: rent for the greeting account plus a
/// fixed fee allowance, on top of the payer's own rent-exempt reserve.
///
/// The reserve keeps the payer rent-exempt after paying for the greeting
/// account; the runtime rejects transactions that leave it rent-paying.
pub async fn required_payer_balance(
    connection: &impl SolConnection,
    fee_allowance: u64,
) -> Result<u64> {
    let greeting_rent = utils::fetch_rent_exempt_minimum(connection, GREETING_SIZE).await?;
    let payer_reserve = utils::fetch_rent_exempt_minimum(connection, 0).await?;
    debug!(
        "Rent-exempt minimum for {} bytes is {} lamports, payer reserve {}, fee allowance {}",
        GREETING_SIZE, greeting_rent, payer_reserve, fee_allowance
    );
    Ok(greeting_rent
        .saturating_add(payer_reserve)
        .saturating_add(fee_allowance))
}

/// Make sure `payer` holds at least `required` lamports, requesting an airdrop
/// for the shortfall if it does not.
///
/// A single airdrop is attempted and its confirmation awaited for at most
/// `confirm_timeout`. Returns the payer's balance afterwards.
pub async fn ensure_funded(
    connection: &impl SolConnection,
    payer: &Pubkey,
    required: u64,
    confirm_timeout: Duration,
    poll_interval: Duration,
) -> Result<u64> {
    let balance = utils::fetch_balance(connection, payer).await?;
    if balance >= required {
        info!("Using account {} containing {} lamports to pay for fees", payer, balance);
        return Ok(balance);
    }

    let shortfall = required - balance;
    info!("Requesting airdrop of {} lamports for {}", shortfall, payer);
    match connection.request_airdrop(payer, shortfall).await {
        Ok(signature) => {
            if !wait_for_confirmation(connection, &signature, confirm_timeout, poll_interval).await {
                warn!("Airdrop {} not confirmed within {:?}", signature, confirm_timeout);
            }
        },
        Err(e) => warn!("Airdrop request for {} failed: {}", payer, e),
    }

    let balance = utils::fetch_balance(connection, payer).await?;
    if balance < required {
        return Err(GreeterError::InsufficientFunds {
            payer: *payer,
            balance,
            required,
        });
    }

    info!("Using account {} containing {} lamports to pay for fees", payer, balance);
    Ok(balance)
}

/// Poll until `signature` is confirmed. Returns `false` if `timeout` elapses
/// first or the status cannot be queried; the caller re-reads the balance
/// either way.
///
/// A timeout too large to represent as a deadline waits without bound.
async fn wait_for_confirmation(
    connection: &impl SolConnection,
    signature: &Signature,
    timeout: Duration,
    poll_interval: Duration,
) -> bool {
    let deadline = Instant::now().checked_add(timeout);
    loop {
        match connection.confirm_transaction(signature).await {
            Ok(true) => return true,
            Ok(false) => {},
            Err(e) => {
                warn!("Status of airdrop {} unavailable: {}", signature, e);
                return false;
            },
        }
        if let Some(deadline) = deadline {
            let next_poll = Instant::now().checked_add(poll_interval);
            if next_poll.map_or(true, |next| next > deadline) {
                return false;
            }
        }
        tokio::time::sleep(poll_interval).await;
    }
}
