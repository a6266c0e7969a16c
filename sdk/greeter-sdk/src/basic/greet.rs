use std::time::Duration;

use log::info;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};

use crate::advanced::instructions;
use crate::core::connection::SolConnection;
use crate::error::Result;
use crate::utils;

/// Send one greeting to `greeted`, blocking until the transaction is confirmed.
///
/// The greeter program bumps the stored counter by one on every successful call.
pub async fn say_hello(
    connection: &impl SolConnection,
    program_id: &Pubkey,
    greeted: &Pubkey,
    payer: &Keypair,
    confirm_timeout: Duration,
) -> Result<Signature> {
    info!("Saying hello to {}", greeted);
    let ix = instructions::greet(program_id, greeted);
    utils::send_and_confirm(connection, payer, &[ix], confirm_timeout).await
}
