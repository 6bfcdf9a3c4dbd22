//! Error types for the wallet ledger
//!
//! Two families of errors live here:
//!
//! - [`WalletError`]: returned by ledger operations. Every variant is
//!   recoverable and leaves the balance exactly as it was before the call.
//! - [`ShellError`]: raised by the interactive shell around the ledger
//!   (bad menu input, unreadable script files, terminal I/O failures).

use super::amount::Bitcoin;
use thiserror::Error;

/// Error kinds returned by deposit, withdraw and checked construction
///
/// Values are compared by variant and content, never by identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The amount was zero or negative
    #[error("incorrect input: amount must be positive, got {amount}")]
    IncorrectInput {
        /// The rejected amount
        amount: Bitcoin,
    },

    /// A withdrawal asked for more than the current balance
    #[error("not enough money to withdraw: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the request
        balance: Bitcoin,
        /// Requested withdrawal amount
        requested: Bitcoin,
    },

    /// Checked decimal arithmetic failed
    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// The wallet's actor task is no longer running
    #[error("wallet is closed")]
    WalletClosed,
}

impl WalletError {
    /// Create an IncorrectInput error
    pub fn incorrect_input(amount: Bitcoin) -> Self {
        WalletError::IncorrectInput { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Bitcoin, requested: Bitcoin) -> Self {
        WalletError::InsufficientFunds { balance, requested }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        WalletError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

/// Errors raised by the interactive shell
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShellError {
    /// Script file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// Reading input or writing output failed
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A line could not be parsed as a menu choice or an amount
    #[error("Incorrect input '{input}'")]
    InvalidInput {
        /// The offending line, trimmed
        input: String,
    },

    /// A number that is not on the menu
    #[error("Option {choice} doesn't exist")]
    UnknownOption {
        /// The selected number
        choice: i64,
    },
}

impl From<std::io::Error> for ShellError {
    fn from(error: std::io::Error) -> Self {
        ShellError::IoError {
            message: error.to_string(),
        }
    }
}

impl ShellError {
    /// Create an InvalidInput error
    pub fn invalid_input(input: &str) -> Self {
        ShellError::InvalidInput {
            input: input.trim().to_string(),
        }
    }
}
