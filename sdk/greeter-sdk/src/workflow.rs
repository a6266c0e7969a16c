//! The end-to-end greeting sequence.
//!
//! A [`Workflow`] owns its session and payer and walks the stages
//! `Disconnected → Connected → PayerFunded → ProgramVerified →
//! AccountProvisioned → InstructionExecuted → StateReported` strictly in order.
//! The first failure aborts the run; nothing is retried or rolled back.

use std::fmt::Display;
use std::future::Future;

use log::{debug, info};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use thiserror::Error;

use crate::basic::{account, funding, greet, program, report};
use crate::core::config::WorkflowConfig;
use crate::core::connection::{establish_connection, SolConnection};
use crate::error::{GreeterError, Result};
use crate::types::GreetingReport;
use crate::utils;

/// Position of a run in the greeting sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Disconnected,
    Connected,
    PayerFunded,
    ProgramVerified,
    AccountProvisioned,
    InstructionExecuted,
    StateReported,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let step = match self {
            Stage::Disconnected => "disconnect",
            Stage::Connected => "connect",
            Stage::PayerFunded => "fund payer",
            Stage::ProgramVerified => "verify program",
            Stage::AccountProvisioned => "provision greeting account",
            Stage::InstructionExecuted => "say hello",
            Stage::StateReported => "report greetings",
        };
        f.write_str(step)
    }
}

/// A run aborted while trying to reach `stage`
#[derive(Debug, Error)]
#[error("{stage} stage failed")]
pub struct WorkflowError {
    pub stage: Stage,
    #[source]
    pub error: GreeterError,
}

/// Everything the stages share, fixed for the lifetime of a run
pub struct WorkflowContext<C: SolConnection> {
    pub session: C,
    pub payer: Keypair,
    pub program_id: Pubkey,
    pub derived_address: Pubkey,
}

pub struct Workflow<C: SolConnection> {
    context: WorkflowContext<C>,
    config: WorkflowConfig,
}

impl<C: SolConnection> Workflow<C> {
    pub fn builder() -> WorkflowBuilder<C> {
        WorkflowBuilder::new()
    }

    pub fn context(&self) -> &WorkflowContext<C> {
        &self.context
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Run every stage once and report the greeting counter.
    ///
    /// Funding and provisioning are idempotent, so running again against the
    /// same payer and program only adds one more greeting.
    pub async fn run(&self) -> std::result::Result<GreetingReport, WorkflowError> {
        let WorkflowContext {
            session,
            payer,
            program_id,
            derived_address,
        } = &self.context;
        let config = &self.config;

        let node_version = step(Stage::Connected, establish_connection(session)).await?;

        let payer_balance = step(Stage::PayerFunded, async {
            let required =
                funding::required_payer_balance(session, config.fee_allowance_lamports).await?;
            funding::ensure_funded(
                session,
                &payer.pubkey(),
                required,
                config.confirm_timeout,
                config.confirm_poll_interval,
            )
            .await
        })
        .await?;

        step(
            Stage::ProgramVerified,
            program::verify_program(session, program_id),
        )
        .await?;

        let provisioned = step(
            Stage::AccountProvisioned,
            account::ensure_greeting_account(
                session,
                payer,
                &config.seed,
                program_id,
                config.confirm_timeout,
            ),
        )
        .await?;
        debug_assert_eq!(provisioned.address, *derived_address);

        let signature = step(
            Stage::InstructionExecuted,
            greet::say_hello(
                session,
                program_id,
                derived_address,
                payer,
                config.confirm_timeout,
            ),
        )
        .await?;

        let counter = step(
            Stage::StateReported,
            report::read_greeting_counter(session, derived_address),
        )
        .await?;

        Ok(GreetingReport {
            payer: payer.pubkey(),
            program_id: *program_id,
            greeted_account: *derived_address,
            account_created: provisioned.created,
            payer_balance,
            signature,
            counter,
            node_version,
        })
    }
}

async fn step<T>(
    stage: Stage,
    action: impl Future<Output = Result<T>>,
) -> std::result::Result<T, WorkflowError> {
    match action.await {
        Ok(value) => {
            debug!("Reached stage {:?}", stage);
            Ok(value)
        },
        Err(error) => Err(WorkflowError { stage, error }),
    }
}

/// Collects the session, payer and program id a [`Workflow`] cannot run without.
pub struct WorkflowBuilder<C: SolConnection> {
    session: Option<C>,
    payer: Option<Keypair>,
    program_id: Option<Pubkey>,
    config: WorkflowConfig,
}

impl<C: SolConnection> Default for WorkflowBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SolConnection> WorkflowBuilder<C> {
    pub fn new() -> Self {
        Self {
            session: None,
            payer: None,
            program_id: None,
            config: WorkflowConfig::default(),
        }
    }

    pub fn with_session(mut self, session: C) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_payer(mut self, payer: Keypair) -> Self {
        self.payer = Some(payer);
        self
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = Some(program_id);
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.config.seed = seed.into();
        self
    }

    pub fn with_config(mut self, config: WorkflowConfig) -> Self {
        self.config = config;
        self
    }

    /// Fails with [`GreeterError::Configuration`] if a required field is missing
    /// or the greeting address cannot be derived from the inputs.
    pub fn build(self) -> Result<Workflow<C>> {
        let session = self
            .session
            .ok_or_else(|| GreeterError::Configuration("Session required".to_string()))?;
        let payer = self
            .payer
            .ok_or_else(|| GreeterError::Configuration("Payer required".to_string()))?;
        let program_id = self
            .program_id
            .ok_or_else(|| GreeterError::Configuration("Program id required".to_string()))?;

        let derived_address =
            utils::derive_greeting_address(&payer.pubkey(), &self.config.seed, &program_id)?;
        info!(
            "Greeting account for payer {} under program {} is {}",
            payer.pubkey(),
            program_id,
            derived_address
        );

        Ok(Workflow {
            context: WorkflowContext {
                session,
                payer,
                program_id,
                derived_address,
            },
            config: self.config,
        })
    }
}
