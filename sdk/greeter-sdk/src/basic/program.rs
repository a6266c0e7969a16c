use log::info;
use solana_sdk::pubkey::Pubkey;

use crate::core::connection::SolConnection;
use crate::error::{GreeterError, Result};
use crate::utils;

/// Check that `program_id` points at a deployed, executable program
pub async fn verify_program(connection: &impl SolConnection, program_id: &Pubkey) -> Result<()> {
    info!("Checking deployment of program {}", program_id);
    let account = utils::fetch_account(connection, program_id)
        .await?
        .ok_or(GreeterError::ProgramNotFound(*program_id))?;

    if !account.executable {
        return Err(GreeterError::NotExecutable(*program_id));
    }

    info!("Found executable program {}", program_id);
    Ok(())
}
