//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `amount`: the `Bitcoin` currency amount
//! - `error`: error types for the ledger and the shell

pub mod amount;
pub mod error;

pub use amount::Bitcoin;
pub use error::{ShellError, WalletError};
