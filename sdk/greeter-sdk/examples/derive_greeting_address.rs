// Example: Deriving the greeting account of a payer
//
// This example demonstrates how to:
// 1. Derive the greeting account address for a payer and program
// 2. Show that the derivation is deterministic
// 3. Encode the initial greeting state

use greeter_sdk::core::constants::GREETING_SEED;
use greeter_sdk::{derive_greeting_address, GreetingAccount};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Payer and program id (replace with your own)
    let payer = Keypair::new();
    let program_id = Pubkey::new_unique();

    // 2. Derive the greeting account
    let greeted = derive_greeting_address(&payer.pubkey(), GREETING_SEED, &program_id)?;
    assert_eq!(
        greeted,
        derive_greeting_address(&payer.pubkey(), GREETING_SEED, &program_id)?
    );

    println!("Greeting account:");
    println!("  Payer: {}", payer.pubkey());
    println!("  Program ID: {}", program_id);
    println!("  Address: {}", greeted);
    println!("  Initial data: {:?}", GreetingAccount::default().encode());

    // In a real application, you would:
    // let session = RpcConnection::connect("http://127.0.0.1:8899", CommitmentConfig::confirmed()).await?;
    // let report = Workflow::builder()
    //     .with_session(session)
    //     .with_payer(payer)
    //     .with_program_id(program_id)
    //     .build()?
    //     .run()
    //     .await?;

    Ok(())
}
