//! Actor-based wallet for async callers
//!
//! This module provides `AsyncWallet`, a cloneable handle to a balance owned by
//! a single tokio task.
//!
//! # Design
//!
//! ```text
//! AsyncWallet (clone) ──┐
//! AsyncWallet (clone) ──┼── mpsc::Sender<Request> ──> actor task (owns balance)
//! AsyncWallet (clone) ──┘                               │
//!                         oneshot::Sender<reply> <──────┘
//! ```
//!
//! The actor drains its queue one request at a time, so the queue plays the
//! role of the mutex in [`Wallet`](crate::core::Wallet): every deposit and
//! withdrawal is applied whole before the next one is looked at. The actor
//! applies the same `credit`/`debit` rules as the synchronous wallet.
//!
//! The task stops once every handle has been dropped. If the runtime that
//! hosts it shuts down first, further requests fail with `WalletClosed`.

use crate::core::traits::format_statement;
use crate::core::wallet::{credit, debit};
use crate::types::{Bitcoin, WalletError};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};

/// Number of requests that may wait in the actor's queue
const REQUEST_BUFFER: usize = 64;

type Reply<T> = oneshot::Sender<T>;

#[derive(Debug)]
enum Request {
    Deposit {
        amount: Bitcoin,
        reply: Reply<Result<(), WalletError>>,
    },
    Withdraw {
        amount: Bitcoin,
        reply: Reply<Result<(), WalletError>>,
    },
    Balance {
        reply: Reply<Bitcoin>,
    },
}

/// Handle to a wallet served by an actor task
///
/// Cloning the handle is cheap; all clones talk to the same balance.
///
/// # Examples
///
/// ```
/// use rust_wallet_ledger::{AsyncWallet, Bitcoin};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let wallet = AsyncWallet::spawn("Nikita", Bitcoin::new(5, 0));
/// wallet.withdraw(Bitcoin::new(1, 0)).await.unwrap();
///
/// assert_eq!(wallet.balance().await.unwrap(), Bitcoin::new(4, 0));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AsyncWallet {
    owner: Arc<str>,
    requests: mpsc::Sender<Request>,
}

impl AsyncWallet {
    /// Start a wallet actor on the current tokio runtime
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, like `tokio::spawn`.
    pub fn spawn(owner: impl Into<String>, balance: Bitcoin) -> Self {
        Self::spawn_on(&Handle::current(), owner, balance)
    }

    /// Start a wallet actor on the given runtime
    ///
    /// The opening balance is not validated, matching [`Wallet::new`](crate::core::Wallet::new).
    pub fn spawn_on(handle: &Handle, owner: impl Into<String>, balance: Bitcoin) -> Self {
        let owner: String = owner.into();
        let (requests, inbox) = mpsc::channel(REQUEST_BUFFER);
        handle.spawn(serve(balance, inbox));

        AsyncWallet {
            owner: Arc::from(owner),
            requests,
        }
    }

    /// The owner's display name
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Deposit a strictly positive amount
    ///
    /// # Errors
    ///
    /// - `IncorrectInput` if `amount <= 0`
    /// - `ArithmeticOverflow` if the new balance does not fit
    /// - `WalletClosed` if the actor is no longer running
    pub async fn deposit(&self, amount: Bitcoin) -> Result<(), WalletError> {
        self.call(|reply| Request::Deposit { amount, reply }).await?
    }

    /// Withdraw a strictly positive amount
    ///
    /// # Errors
    ///
    /// - `IncorrectInput` if `amount <= 0`
    /// - `InsufficientFunds` if `amount` exceeds the balance
    /// - `WalletClosed` if the actor is no longer running
    pub async fn withdraw(&self, amount: Bitcoin) -> Result<(), WalletError> {
        self.call(|reply| Request::Withdraw { amount, reply }).await?
    }

    /// Current balance as seen by the actor
    pub async fn balance(&self) -> Result<Bitcoin, WalletError> {
        self.call(|reply| Request::Balance { reply }).await
    }

    /// Human-readable summary, e.g. `User "Nikita" balance is 2.0000 BTC`
    pub async fn statement(&self) -> Result<String, WalletError> {
        let balance = self.balance().await?;
        Ok(format_statement(&self.owner, balance))
    }

    async fn call<T>(&self, request: impl FnOnce(Reply<T>) -> Request) -> Result<T, WalletError> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(request(reply))
            .await
            .map_err(|_| WalletError::WalletClosed)?;
        response.await.map_err(|_| WalletError::WalletClosed)
    }
}

async fn serve(mut balance: Bitcoin, mut inbox: mpsc::Receiver<Request>) {
    while let Some(request) = inbox.recv().await {
        // A caller that stopped waiting drops its receiver; the result is
        // already applied, so a failed reply is ignored.
        match request {
            Request::Deposit { amount, reply } => {
                let _ = reply.send(credit(&mut balance, amount));
            }
            Request::Withdraw { amount, reply } => {
                let _ = reply.send(debit(&mut balance, amount));
            }
            Request::Balance { reply } => {
                let _ = reply.send(balance);
            }
        }
    }
}
