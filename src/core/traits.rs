//! Core trait for ledger backends
//!
//! This module defines the seam between the interactive shell and whatever
//! owns the balance, so the shell can drive any synchronous ledger.

use crate::types::{Bitcoin, WalletError};

/// Trait for a single-account ledger
///
/// Implementations must make `deposit` and `withdraw` atomic with respect to
/// each other, and `balance` must never observe a partially applied mutation.
pub trait Ledger: Send + Sync {
    /// The owner's display name
    fn owner(&self) -> &str;

    /// Credit a strictly positive amount
    fn deposit(&self, amount: Bitcoin) -> Result<(), WalletError>;

    /// Debit a strictly positive amount, refusing to go below zero
    fn withdraw(&self, amount: Bitcoin) -> Result<(), WalletError>;

    /// A consistent snapshot of the current balance
    fn balance(&self) -> Bitcoin;

    /// Human-readable summary, e.g. `User "Nikita" balance is 2.0000 BTC`
    fn statement(&self) -> String {
        format_statement(self.owner(), self.balance())
    }
}

pub(crate) fn format_statement(owner: &str, balance: Bitcoin) -> String {
    format!("User {:?} balance is {}", owner, balance)
}
