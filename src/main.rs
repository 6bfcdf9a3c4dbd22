//! Rust Wallet Ledger CLI
//!
//! Interactive menu for a single wallet.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --owner Alice --balance 10.5
//! cargo run -- --script session.txt
//! RUST_LOG=info cargo run -- --log-format json
//! ```
//!
//! The program builds one wallet from the command-line settings, then runs the
//! menu loop on stdin (or on a script file) until the user chooses Exit or the
//! input ends. Diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (negative opening balance, script not found, I/O failure, etc.)

use rust_wallet_ledger::cli;
use rust_wallet_ledger::observability;
use rust_wallet_ledger::shell::{self, Shell};
use rust_wallet_ledger::Wallet;
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();
    observability::init(args.log_format);

    let config = args.to_wallet_config();
    let wallet = match Wallet::try_new(config.owner, config.opening_balance) {
        Ok(wallet) => wallet,
        Err(e) => {
            tracing::error!(error = %e, "invalid opening balance");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let result = match &args.script {
        Some(path) => shell::run_script(&wallet, path, stdout.lock()),
        None => Shell::new(&wallet, stdout.lock()).run(io::stdin().lock()),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "session aborted");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
