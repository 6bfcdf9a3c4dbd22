//! Asynchronous implementations of core components
//!
//! This module provides the actor-based wallet for callers running on a tokio
//! runtime.
//!
//! # Architecture
//!
//! - **AsyncWallet**: a cloneable handle; the balance lives in a single task
//!   that serves deposit, withdraw and balance requests one at a time
//!
//! # Thread Safety
//!
//! Handles are `Send + Sync + Clone` and may be moved into any number of tasks.
//! Serialization comes from the actor's queue rather than from a lock.

pub mod wallet;

pub use wallet::AsyncWallet;
