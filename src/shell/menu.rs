//! Menu text and selection parsing

use crate::types::ShellError;
use std::str::FromStr;

/// Menu printed before every selection
pub const MENU: &str = "1. Amount\n2. Deposit\n3. Withdraw\n4. Exit\n";

/// Prompt printed before reading a deposit amount
pub const DEPOSIT_PROMPT: &str = "enter the deposit amount » ";

/// Prompt printed before reading a withdrawal amount
pub const WITHDRAW_PROMPT: &str = "enter the withdraw amount » ";

/// One entry of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Show the wallet statement
    Balance,
    /// Ask for an amount and deposit it
    Deposit,
    /// Ask for an amount and withdraw it
    Withdraw,
    /// End the session
    Exit,
}

impl FromStr for MenuOption {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice: i64 = s.trim().parse().map_err(|_| ShellError::invalid_input(s))?;

        match choice {
            1 => Ok(MenuOption::Balance),
            2 => Ok(MenuOption::Deposit),
            3 => Ok(MenuOption::Withdraw),
            4 => Ok(MenuOption::Exit),
            _ => Err(ShellError::UnknownOption { choice }),
        }
    }
}
