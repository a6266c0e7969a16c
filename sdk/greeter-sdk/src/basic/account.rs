use std::time::Duration;

use log::{debug, info};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

use crate::advanced::instructions;
use crate::core::connection::SolConnection;
use crate::error::{GreeterError, Result};
use crate::state::GREETING_SIZE;
use crate::types::ProvisionedAccount;
use crate::utils;

/// Derive the payer's greeting account for `program_id` and create it if it
/// does not exist yet.
///
/// An existing account is left untouched, whatever its size or balance.
pub async fn ensure_greeting_account(
    connection: &impl SolConnection,
    payer: &Keypair,
    seed: &str,
    program_id: &Pubkey,
    confirm_timeout: Duration,
) -> Result<ProvisionedAccount> {
    let address = utils::derive_greeting_address(&payer.pubkey(), seed, program_id)?;

    if utils::fetch_account(connection, &address).await?.is_some() {
        info!("Found existing greeting account {}", address);
        return Ok(ProvisionedAccount {
            address,
            created: false,
        });
    }

    let lamports = utils::fetch_rent_exempt_minimum(connection, GREETING_SIZE).await?;
    debug!("Funding greeting account with {} lamports", lamports);
    info!("Creating greeting account {}", address);

    let ix = instructions::create_greeting_account(
        program_id,
        &payer.pubkey(),
        &address,
        seed,
        lamports,
    );
    utils::send_and_confirm(connection, payer, &[ix], confirm_timeout)
        .await
        .map_err(|e| GreeterError::Provision {
            address,
            reason: e.to_string(),
        })?;

    Ok(ProvisionedAccount {
        address,
        created: true,
    })
}
