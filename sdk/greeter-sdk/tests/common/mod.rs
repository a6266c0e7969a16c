use async_trait::async_trait;
use greeter_sdk::core::connection::SolConnection;
use greeter_sdk::state::GreetingAccount;
use solana_program::account_info::{next_account_info, AccountInfo};
use solana_program::entrypoint::ProgramResult;
use solana_program::program_error::ProgramError;
use solana_program_test::{processor, ProgramTest, ProgramTestBanksClientExt, ProgramTestContext};
use solana_sdk::{
    account::{Account, AccountSharedData},
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::Transaction,
};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Native build of the greeter program: bumps the counter of the single
/// account it is given.
pub fn process_greeting(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    _instruction_data: &[u8],
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let greeted = next_account_info(accounts_iter)?;

    if greeted.owner != program_id {
        return Err(ProgramError::IncorrectProgramId);
    }

    let mut greeting = GreetingAccount::decode(&greeted.data.borrow())
        .map_err(|_| ProgramError::InvalidAccountData)?;
    greeting.counter = greeting
        .counter
        .checked_add(1)
        .ok_or(ProgramError::ArithmeticOverflow)?;
    greeted.data.borrow_mut().copy_from_slice(&greeting.encode());

    Ok(())
}

/// Ledger session over a `solana-program-test` bank with the greeter
/// program deployed. Airdrops are served by the genesis payer.
#[derive(Clone)]
pub struct TestContext {
    pub context: Arc<Mutex<ProgramTestContext>>,
    pub program_id: Pubkey,
    last_blockhash: Arc<Mutex<Hash>>,
    faucet_enabled: bool,
    stalled: bool,
}

impl TestContext {
    pub async fn new() -> Self {
        let program_id = Pubkey::new_unique();
        let mut program_test =
            ProgramTest::new("greeter_program", program_id, processor!(process_greeting));
        program_test.prefer_bpf(false);

        let context = program_test.start_with_context().await;
        let last_blockhash = context.last_blockhash;

        Self {
            context: Arc::new(Mutex::new(context)),
            program_id,
            last_blockhash: Arc::new(Mutex::new(last_blockhash)),
            faucet_enabled: true,
            stalled: false,
        }
    }

    /// Same ledger, but airdrop requests fail as on a cluster without a faucet
    pub fn without_faucet(&self) -> Self {
        Self {
            faucet_enabled: false,
            ..self.clone()
        }
    }

    /// Same ledger, but nothing submitted ever lands: airdrops are accepted
    /// without being applied, statuses never confirm and sends never return.
    pub fn stalled(&self) -> Self {
        Self {
            stalled: true,
            ..self.clone()
        }
    }

    pub async fn set_account(&self, address: &Pubkey, account: Account) {
        self.context
            .lock()
            .await
            .set_account(address, &AccountSharedData::from(account));
    }

    pub async fn balance(&self, address: &Pubkey) -> u64 {
        let client = self.context.lock().await.banks_client.clone();
        client.get_balance(*address).await.unwrap()
    }

    pub async fn account(&self, address: &Pubkey) -> Option<Account> {
        let client = self.context.lock().await.banks_client.clone();
        client.get_account(*address).await.unwrap()
    }

    /// A blockhash no earlier transaction has used, so identical
    /// transactions sent twice get distinct signatures.
    async fn fresh_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        let mut client = self.context.lock().await.banks_client.clone();
        let mut last = self.last_blockhash.lock().await;
        let blockhash = client.get_new_latest_blockhash(&last).await?;
        *last = blockhash;
        Ok(blockhash)
    }
}

#[async_trait]
impl SolConnection for TestContext {
    async fn get_version(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        Ok("solana-program-test".to_string())
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let client = self.context.lock().await.banks_client.clone();
        client
            .get_balance(*pubkey)
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn Error + Send + Sync>> {
        let client = self.context.lock().await.banks_client.clone();
        client
            .get_account(*pubkey)
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        self.fresh_blockhash().await
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let client = self.context.lock().await.banks_client.clone();
        let rent = client
            .get_rent()
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)?;
        Ok(rent.minimum_balance(data_len))
    }

    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        if !self.faucet_enabled {
            return Err("airdrops are not available on this cluster".into());
        }
        if self.stalled {
            return Ok(Signature::from([7u8; 64]));
        }

        let blockhash = self.fresh_blockhash().await?;
        let ctx = self.context.lock().await;
        let ix = system_instruction::transfer(&ctx.payer.pubkey(), pubkey, lamports);
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&ctx.payer.pubkey()),
            &[&ctx.payer],
            blockhash,
        );
        let signature = tx.signatures[0];
        ctx.banks_client
            .clone()
            .process_transaction(tx)
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)?;
        Ok(signature)
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        if self.stalled {
            return Ok(false);
        }
        let client = self.context.lock().await.banks_client.clone();
        let status = client
            .get_transaction_status(*signature)
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)?;
        Ok(status.is_some_and(|status| status.err.is_none()))
    }

    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        if self.stalled {
            return std::future::pending().await;
        }
        let client = self.context.lock().await.banks_client.clone();
        let signature = *tx.signatures.first().ok_or("No signature")?;
        client
            .process_transaction(tx.clone())
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)?;
        Ok(signature)
    }
}

/// A payer that has never held any lamports
pub fn fresh_payer() -> Keypair {
    Keypair::new()
}

pub async fn setup_test_context() -> TestContext {
    TestContext::new().await
}
