//! Wallet module
//!
//! This module provides the `Wallet` struct, a single-account ledger whose
//! balance sits behind a mutex. It also holds the balance rules shared with the
//! async actor: [`credit`] and [`debit`] validate the amount and apply checked
//! arithmetic, and never touch the balance when they fail.

use crate::core::traits::{format_statement, Ledger};
use crate::types::{Bitcoin, WalletError};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Add `amount` to `balance`
///
/// # Errors
///
/// - `IncorrectInput` if `amount` is not strictly positive
/// - `ArithmeticOverflow` if the sum does not fit in a decimal
pub(crate) fn credit(balance: &mut Bitcoin, amount: Bitcoin) -> Result<(), WalletError> {
    if !amount.is_positive() {
        return Err(WalletError::incorrect_input(amount));
    }

    *balance = balance
        .checked_add(amount)
        .ok_or_else(|| WalletError::arithmetic_overflow("deposit"))?;

    Ok(())
}

/// Subtract `amount` from `balance`
///
/// # Errors
///
/// - `IncorrectInput` if `amount` is not strictly positive
/// - `InsufficientFunds` if the balance would become negative
pub(crate) fn debit(balance: &mut Bitcoin, amount: Bitcoin) -> Result<(), WalletError> {
    if !amount.is_positive() {
        return Err(WalletError::incorrect_input(amount));
    }

    if *balance < amount {
        return Err(WalletError::insufficient_funds(*balance, amount));
    }

    *balance = balance
        .checked_sub(amount)
        .ok_or_else(|| WalletError::arithmetic_overflow("withdraw"))?;

    Ok(())
}

/// A single-account ledger that is safe to share between threads
///
/// Every deposit, withdrawal and balance read runs under the same mutex, so
/// concurrent calls behave as if they were applied one at a time.
///
/// # Examples
///
/// ```
/// use rust_wallet_ledger::{Bitcoin, Wallet};
///
/// let wallet = Wallet::new("Nikita", Bitcoin::ZERO);
/// wallet.deposit(Bitcoin::new(2, 0)).unwrap();
///
/// assert_eq!(wallet.balance(), Bitcoin::new(2, 0));
/// assert_eq!(wallet.to_string(), "User \"Nikita\" balance is 2.0000 BTC");
/// ```
#[derive(Debug)]
pub struct Wallet {
    owner: String,
    balance: Mutex<Bitcoin>,
}

impl Wallet {
    /// Create a wallet with the given owner and opening balance
    ///
    /// The opening balance is not validated; a negative value is accepted as
    /// given. Use [`Wallet::try_new`] to refuse it.
    pub fn new(owner: impl Into<String>, balance: Bitcoin) -> Self {
        Wallet {
            owner: owner.into(),
            balance: Mutex::new(balance),
        }
    }

    /// Create a wallet, refusing a negative opening balance
    ///
    /// # Errors
    ///
    /// Returns `IncorrectInput` if `balance` is below zero. A zero opening
    /// balance is allowed.
    pub fn try_new(owner: impl Into<String>, balance: Bitcoin) -> Result<Self, WalletError> {
        if balance.is_negative() {
            return Err(WalletError::incorrect_input(balance));
        }
        Ok(Self::new(owner, balance))
    }

    /// The owner's display name
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Current balance, read under the lock
    pub fn balance(&self) -> Bitcoin {
        *self.lock()
    }

    /// Deposit a strictly positive amount
    ///
    /// # Errors
    ///
    /// - `IncorrectInput` if `amount <= 0`
    /// - `ArithmeticOverflow` if the new balance does not fit
    ///
    /// On error the balance is left unchanged.
    pub fn deposit(&self, amount: Bitcoin) -> Result<(), WalletError> {
        credit(&mut self.lock(), amount)
    }

    /// Withdraw a strictly positive amount
    ///
    /// The sufficiency check and the subtraction happen under one lock, so two
    /// concurrent withdrawals can never both pass the check against the same
    /// balance.
    ///
    /// # Errors
    ///
    /// - `IncorrectInput` if `amount <= 0`
    /// - `InsufficientFunds` if `amount` exceeds the balance
    ///
    /// On error the balance is left unchanged.
    pub fn withdraw(&self, amount: Bitcoin) -> Result<(), WalletError> {
        debit(&mut self.lock(), amount)
    }

    // Critical sections never panic, so a poisoned guard still holds a
    // consistent balance.
    fn lock(&self) -> MutexGuard<'_, Bitcoin> {
        self.balance.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Ledger for Wallet {
    fn owner(&self) -> &str {
        Wallet::owner(self)
    }

    fn deposit(&self, amount: Bitcoin) -> Result<(), WalletError> {
        Wallet::deposit(self, amount)
    }

    fn withdraw(&self, amount: Bitcoin) -> Result<(), WalletError> {
        Wallet::withdraw(self, amount)
    }

    fn balance(&self) -> Bitcoin {
        Wallet::balance(self)
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_statement(&self.owner, self.balance()))
    }
}
