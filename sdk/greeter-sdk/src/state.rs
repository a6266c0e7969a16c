//! Fixed-layout state of a greeting account.
//!
//! The greeter program stores a single little-endian `u32` with no header, so
//! the account is always exactly [`GREETING_SIZE`] bytes long.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::error::{GreeterError, Result};

/// Size in bytes of a serialized [`GreetingAccount`].
pub const GREETING_SIZE: usize = std::mem::size_of::<u32>();

/// State of a greeting account managed by the greeter program
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq,
)]
pub struct GreetingAccount {
    /// Number of greetings the account has received
    pub counter: u32,
}

impl GreetingAccount {
    pub fn new(counter: u32) -> Self {
        Self { counter }
    }

    pub fn encode(&self) -> [u8; GREETING_SIZE] {
        self.counter.to_le_bytes()
    }

    /// Decode account data, rejecting any buffer that is not exactly
    /// [`GREETING_SIZE`] bytes long.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() != GREETING_SIZE {
            return Err(GreeterError::Decode {
                expected: GREETING_SIZE,
                actual: data.len(),
            });
        }

        Self::try_from_slice(data).map_err(|_| GreeterError::Decode {
            expected: GREETING_SIZE,
            actual: data.len(),
        })
    }
}
