use crate::types::Bitcoin;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Interactive single-account wallet
#[derive(Parser, Debug)]
#[command(name = "wallet")]
#[command(about = "Interactive single-account wallet with deposit and withdraw", long_about = None)]
pub struct CliArgs {
    /// Display name of the wallet owner
    #[arg(
        long = "owner",
        value_name = "NAME",
        default_value = "Nikita",
        help = "Display name of the wallet owner"
    )]
    pub owner: String,

    /// Opening balance of the wallet
    #[arg(
        long = "balance",
        value_name = "AMOUNT",
        default_value = "1.00",
        allow_negative_numbers = true,
        help = "Opening balance in BTC (must not be negative)"
    )]
    pub balance: Bitcoin,

    /// Read menu commands from a file instead of stdin
    #[arg(
        long = "script",
        value_name = "PATH",
        help = "Read menu commands from a file instead of the terminal"
    )]
    pub script: Option<PathBuf>,

    /// Format of diagnostic logs written to stderr
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        default_value = "pretty",
        help = "Log format: 'pretty' for humans or 'json' for log collectors"
    )]
    pub log_format: LogFormat,
}

/// Available log output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Settings needed to construct the session's wallet
#[derive(Clone, Debug, PartialEq)]
pub struct WalletConfig {
    /// Display name of the wallet owner
    pub owner: String,
    /// Opening balance
    pub opening_balance: Bitcoin,
}

impl CliArgs {
    /// Create a WalletConfig from CLI arguments
    ///
    /// The opening balance is passed through as given; the checked wallet
    /// constructor decides whether it is acceptable.
    pub fn to_wallet_config(&self) -> WalletConfig {
        WalletConfig {
            owner: self.owner.clone(),
            opening_balance: self.balance,
        }
    }
}
