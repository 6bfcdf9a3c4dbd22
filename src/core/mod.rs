//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - The `Ledger` trait consumed by the shell
//! - `wallet` - Mutex-guarded wallet and the shared balance rules
//! - `async` - Actor-based wallet for tokio callers

pub mod r#async;
pub mod traits;
pub mod wallet;

pub use r#async::AsyncWallet;
pub use traits::Ledger;
pub use wallet::Wallet;
