use async_trait::async_trait;
use log::info;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::error::Error;

use crate::error::{GreeterError, Result};

/// Session with a remote ledger.
///
/// Every call is a single network round-trip; the SDK maps the boxed transport
/// errors onto [`GreeterError`] at the stage that issued the call.
#[async_trait]
pub trait SolConnection: Send + Sync {
    /// Node software version, used as the connection handshake.
    async fn get_version(&self) -> std::result::Result<String, Box<dyn Error + Send + Sync>>;
    async fn get_balance(&self, pubkey: &Pubkey)
        -> std::result::Result<u64, Box<dyn Error + Send + Sync>>;
    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> std::result::Result<Option<Account>, Box<dyn Error + Send + Sync>>;
    async fn get_latest_blockhash(&self)
        -> std::result::Result<Hash, Box<dyn Error + Send + Sync>>;
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> std::result::Result<u64, Box<dyn Error + Send + Sync>>;
    /// Best-effort faucet request, usually only served by test clusters.
    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> std::result::Result<Signature, Box<dyn Error + Send + Sync>>;
    /// Returns `true` once `signature` reached the session's commitment level.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
    ) -> std::result::Result<bool, Box<dyn Error + Send + Sync>>;
    /// Submit a signed transaction and block until it is confirmed.
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> std::result::Result<Signature, Box<dyn Error + Send + Sync>>;
}

/// Verify the session can talk to the ledger and return the node version.
pub async fn establish_connection(connection: &impl SolConnection) -> Result<String> {
    let version = connection
        .get_version()
        .await
        .map_err(|e| GreeterError::Connection(e.to_string()))?;
    info!("Connection to cluster established, version {}", version);
    Ok(version)
}

/// [`SolConnection`] backed by the JSON-RPC client.
pub struct RpcConnection {
    client: RpcClient,
}

impl RpcConnection {
    /// Create a session without contacting the endpoint.
    pub fn new(url: impl ToString, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.to_string(), commitment),
        }
    }

    /// Create a session and perform the version handshake.
    pub async fn connect(url: impl ToString, commitment: CommitmentConfig) -> Result<Self> {
        let connection = Self::new(url, commitment);
        connection.client.get_version().await.map_err(|e| {
            GreeterError::Connection(format!("{} is unreachable: {}", connection.url(), e))
        })?;
        Ok(connection)
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl SolConnection for RpcConnection {
    async fn get_version(&self) -> std::result::Result<String, Box<dyn Error + Send + Sync>> {
        let version = self.client.get_version().await?;
        Ok(version.solana_core)
    }

    async fn get_balance(
        &self,
        pubkey: &Pubkey,
    ) -> std::result::Result<u64, Box<dyn Error + Send + Sync>> {
        Ok(self.client.get_balance(pubkey).await?)
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> std::result::Result<Option<Account>, Box<dyn Error + Send + Sync>> {
        let response = self
            .client
            .get_account_with_commitment(pubkey, self.client.commitment())
            .await?;
        Ok(response.value)
    }

    async fn get_latest_blockhash(
        &self,
    ) -> std::result::Result<Hash, Box<dyn Error + Send + Sync>> {
        Ok(self.client.get_latest_blockhash().await?)
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> std::result::Result<u64, Box<dyn Error + Send + Sync>> {
        Ok(self
            .client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await?)
    }

    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> std::result::Result<Signature, Box<dyn Error + Send + Sync>> {
        Ok(self.client.request_airdrop(pubkey, lamports).await?)
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
    ) -> std::result::Result<bool, Box<dyn Error + Send + Sync>> {
        Ok(self.client.confirm_transaction(signature).await?)
    }

    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> std::result::Result<Signature, Box<dyn Error + Send + Sync>> {
        Ok(self.client.send_and_confirm_transaction(tx).await?)
    }
}
