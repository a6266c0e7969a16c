use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;

use crate::state::GREETING_SIZE;

/// System instruction creating the greeting account at `greeted`, funded by
/// `payer` and derived from `payer` + `seed`. The account is sized to the
/// greeting layout and owned by `program_id`.
pub fn create_greeting_account(
    program_id: &Pubkey,
    payer: &Pubkey,
    greeted: &Pubkey,
    seed: &str,
    lamports: u64,
) -> Instruction {
    system_instruction::create_account_with_seed(
        payer,
        greeted,
        payer,
        seed,
        lamports,
        GREETING_SIZE as u64,
        program_id,
    )
}

/// The greeter program's only instruction: no data, the greeted account as the
/// sole writable non-signer.
pub fn greet(program_id: &Pubkey, greeted: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new(*greeted, false)],
        data: vec![],
    }
}
