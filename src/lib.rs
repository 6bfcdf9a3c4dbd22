//! Rust Wallet Ledger Library
//! # Overview
//!
//! This library provides an in-memory, single-account wallet with deposit and
//! withdraw operations that are safe to call from many threads at once, plus a
//! small interactive shell that drives it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (`Bitcoin` amount, error enums)
//! - [`core`] - Business logic components:
//!   - [`core::wallet`] - Mutex-guarded wallet
//!   - [`core::r#async`] - Actor-based wallet for tokio callers
//!   - [`core::traits`] - The `Ledger` trait the shell consumes
//! - [`shell`] - Interactive menu loop over any `BufRead`/`Write` pair
//! - [`cli`] - CLI arguments parsing
//! - [`observability`] - tracing subscriber setup
//!
//! # Operations
//!
//! - **Deposit**: Credit a strictly positive amount
//! - **Withdraw**: Debit a strictly positive amount, never below zero
//! - **Balance**: Read a consistent snapshot of the balance
//!
//! # Invariants
//!
//! - A failed operation leaves the balance exactly as it was
//! - Concurrent operations on one wallet behave as if applied one at a time
//! - The balance never goes negative through an approved withdrawal

// Module declarations
pub mod cli;
pub mod core;
pub mod observability;
pub mod shell;
pub mod types;

pub use self::core::{AsyncWallet, Ledger, Wallet};
pub use types::{Bitcoin, ShellError, WalletError};
