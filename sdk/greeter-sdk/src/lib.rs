pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod state;
pub mod types;
pub mod utils;
pub mod workflow;

pub use crate::core::config::WorkflowConfig;
pub use crate::core::connection::{RpcConnection, SolConnection};
pub use crate::error::{GreeterError, Result};
pub use crate::state::{GreetingAccount, GREETING_SIZE};
pub use crate::types::{GreetingReport, ProvisionedAccount};
pub use crate::utils::derive_greeting_address;
pub use crate::workflow::{Stage, Workflow, WorkflowBuilder, WorkflowContext, WorkflowError};
