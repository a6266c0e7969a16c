use log::info;
use solana_sdk::pubkey::Pubkey;

use crate::core::connection::SolConnection;
use crate::error::Result;
use crate::state::GreetingAccount;
use crate::utils;

/// Read back the greeting counter stored at `greeted`
pub async fn read_greeting_counter(connection: &impl SolConnection, greeted: &Pubkey) -> Result<u32> {
    let data = utils::fetch_account_data(connection, greeted).await?;
    let greeting = GreetingAccount::decode(&data)?;

    info!("Account {} has been greeted {} time(s)", greeted, greeting.counter);
    Ok(greeting.counter)
}
