//! Interactive shell
//!
//! The shell is the only part of the crate that talks to a person. It prints a
//! numbered menu, reads a selection and, for deposits and withdrawals, an
//! amount, then calls the ledger and reports the outcome.
//!
//! Input and output are generic (`BufRead` / `Write`), so the same loop serves
//! the terminal, a script file, or an in-memory buffer in tests.
//!
//! # Error Handling
//!
//! - Bad menu input and unparseable amounts are reported and the loop continues
//! - Ledger errors are reported, logged at `info`, and the loop continues
//! - End of input ends the session normally
//! - I/O errors end the session with `ShellError::IoError`

mod menu;

pub use menu::{MenuOption, DEPOSIT_PROMPT, MENU, WITHDRAW_PROMPT};

use crate::core::Ledger;
use crate::types::{Bitcoin, ShellError, WalletError};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

/// Outcome of reading an amount after a prompt
enum AmountInput {
    Amount(Bitcoin),
    Rejected(ShellError),
    Closed,
}

/// Menu loop driving a ledger
///
/// # Examples
///
/// ```
/// use rust_wallet_ledger::shell::Shell;
/// use rust_wallet_ledger::{Bitcoin, Wallet};
///
/// let wallet = Wallet::new("Nikita", Bitcoin::ZERO);
/// let mut output = Vec::new();
///
/// Shell::new(&wallet, &mut output).run("2\n2.00\n4\n".as_bytes()).unwrap();
///
/// assert_eq!(wallet.balance(), Bitcoin::new(2, 0));
/// ```
pub struct Shell<'a, L: Ledger + ?Sized, W: Write> {
    ledger: &'a L,
    output: W,
}

impl<'a, L: Ledger + ?Sized, W: Write> Shell<'a, L, W> {
    /// Create a shell that drives `ledger` and writes to `output`
    pub fn new(ledger: &'a L, output: W) -> Self {
        Shell { ledger, output }
    }

    /// Run the menu loop until Exit is chosen or input ends
    ///
    /// # Errors
    ///
    /// Returns `ShellError::IoError` if reading input or writing output fails.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<(), ShellError> {
        info!(owner = self.ledger.owner(), "session started");

        loop {
            self.output.write_all(MENU.as_bytes())?;
            self.output.flush()?;

            let Some(line) = read_line(&mut input)? else {
                debug!("input closed at menu");
                return Ok(());
            };

            let option = match line.parse::<MenuOption>() {
                Ok(option) => option,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            debug!(?option, "menu selection");

            match option {
                MenuOption::Balance => {
                    writeln!(self.output, "{}", self.ledger.statement())?;
                }
                MenuOption::Deposit => match self.prompt_amount(&mut input, DEPOSIT_PROMPT)? {
                    AmountInput::Amount(amount) => {
                        let result = self.ledger.deposit(amount);
                        self.report("deposit", "Depositing", amount, result)?;
                    }
                    AmountInput::Rejected(e) => writeln!(self.output, "{}", e)?,
                    AmountInput::Closed => return Ok(()),
                },
                MenuOption::Withdraw => match self.prompt_amount(&mut input, WITHDRAW_PROMPT)? {
                    AmountInput::Amount(amount) => {
                        let result = self.ledger.withdraw(amount);
                        self.report("withdraw", "Withdrawing", amount, result)?;
                    }
                    AmountInput::Rejected(e) => writeln!(self.output, "{}", e)?,
                    AmountInput::Closed => return Ok(()),
                },
                MenuOption::Exit => {
                    writeln!(self.output, "Exit")?;
                    info!(
                        owner = self.ledger.owner(),
                        balance = %self.ledger.balance(),
                        "session ended"
                    );
                    return Ok(());
                }
            }
        }
    }

    fn prompt_amount<R: BufRead>(
        &mut self,
        input: &mut R,
        prompt: &str,
    ) -> Result<AmountInput, ShellError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let Some(line) = read_line(input)? else {
            debug!("input closed at amount prompt");
            return Ok(AmountInput::Closed);
        };

        Ok(match line.parse::<Bitcoin>() {
            Ok(amount) => AmountInput::Amount(amount),
            Err(_) => AmountInput::Rejected(ShellError::invalid_input(&line)),
        })
    }

    fn report(
        &mut self,
        operation: &str,
        verb: &str,
        amount: Bitcoin,
        result: Result<(), WalletError>,
    ) -> Result<(), ShellError> {
        match result {
            Ok(()) => {
                debug!(operation, %amount, "applied");
                writeln!(self.output, "{} {}", verb, amount)?;
            }
            Err(e) => {
                info!(operation, %amount, error = %e, "rejected");
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }
}

/// Run a session whose commands are read from a file
///
/// # Errors
///
/// - `FileNotFound` if `path` does not exist
/// - `IoError` for any other failure opening, reading or writing
pub fn run_script<L, W>(ledger: &L, path: &Path, output: W) -> Result<(), ShellError>
where
    L: Ledger + ?Sized,
    W: Write,
{
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ShellError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ShellError::from(e),
    })?;

    Shell::new(ledger, output).run(BufReader::new(file))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ShellError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Wallet;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    fn session(wallet: &Wallet, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(wallet, &mut output)
            .run(input.as_bytes())
            .expect("session failed");
        String::from_utf8(output).expect("output is not UTF-8")
    }

    #[test]
    fn test_balance_then_exit() {
        let wallet = Wallet::new("Nikita", Bitcoin::new(1, 0));

        let output = session(&wallet, "1\n4\n");

        assert_eq!(
            output,
            format!("{MENU}User \"Nikita\" balance is 1.0000 BTC\n{MENU}Exit\n")
        );
    }

    #[test]
    fn test_deposit_updates_wallet() {
        let wallet = Wallet::new("Nikita", Bitcoin::ZERO);

        let output = session(&wallet, "2\n2.00\n4\n");

        assert_eq!(wallet.balance(), Bitcoin::new(2, 0));
        assert_eq!(
            output,
            format!("{MENU}{DEPOSIT_PROMPT}Depositing 2.0000 BTC\n{MENU}Exit\n")
        );
    }

    #[test]
    fn test_rejected_withdrawal_is_reported() {
        let wallet = Wallet::new("Nikita", Bitcoin::new(1, 0));

        let output = session(&wallet, "3\n2\n4\n");

        assert_eq!(wallet.balance(), Bitcoin::new(1, 0));
        assert!(output.contains(
            "not enough money to withdraw: balance 1.0000 BTC, requested 2.0000 BTC"
        ));
    }

    #[test]
    fn test_negative_deposit_is_reported() {
        let wallet = Wallet::new("Nikita", Bitcoin::new(1, 0));

        let output = session(&wallet, "2\n-1.00\n4\n");

        assert_eq!(wallet.balance(), Bitcoin::new(1, 0));
        assert!(output.contains("incorrect input: amount must be positive, got -1.0000 BTC"));
    }

    #[test]
    fn test_unparseable_amount_does_not_reach_ledger() {
        let wallet = Wallet::new("Nikita", Bitcoin::new(1, 0));

        let output = session(&wallet, "3\nall of it\n4\n");

        assert_eq!(wallet.balance(), Bitcoin::new(1, 0));
        assert!(output.contains("Incorrect input 'all of it'"));
    }

    #[rstest]
    #[case::digit_separator("1_000")]
    #[case::exponent("1e2")]
    fn test_non_plain_amount_is_rejected(#[case] amount: &str) {
        let wallet = Wallet::new("Nikita", Bitcoin::new(1, 0));

        let output = session(&wallet, &format!("2\n{}\n4\n", amount));

        assert_eq!(wallet.balance(), Bitcoin::new(1, 0));
        assert_eq!(
            output,
            format!("{MENU}{DEPOSIT_PROMPT}Incorrect input '{amount}'\n{MENU}Exit\n")
        );
    }

    #[test]
    fn test_sub_display_deposit_is_rounded_in_statement() {
        let wallet = Wallet::new("Nikita", Bitcoin::ZERO);

        let output = session(&wallet, "2\n0.00006\n1\n4\n");

        assert_eq!(wallet.balance(), Bitcoin::new(6, 5));
        assert!(output.contains("Depositing 0.0001 BTC\n"));
        assert!(output.contains("User \"Nikita\" balance is 0.0001 BTC\n"));
    }

    #[test]
    fn test_bad_selections_keep_loop_running() {
        let wallet = Wallet::new("Nikita", Bitcoin::new(1, 0));

        let output = session(&wallet, "abc\n9\n4\n");

        assert_eq!(
            output,
            format!("{MENU}Incorrect input 'abc'\n{MENU}Option 9 doesn't exist\n{MENU}Exit\n")
        );
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let wallet = Wallet::new("Nikita", Bitcoin::new(1, 0));

        assert_eq!(session(&wallet, ""), MENU);
        assert_eq!(session(&wallet, "2\n"), format!("{MENU}{DEPOSIT_PROMPT}"));
    }

    #[test]
    fn test_run_script_from_file() {
        let wallet = Wallet::new("Nikita", Bitcoin::new(1, 0));
        let mut script = NamedTempFile::new().expect("Failed to create temp file");
        script
            .write_all(b"2\n4.32\n1\n4\n")
            .expect("Failed to write to temp file");
        script.flush().expect("Failed to flush temp file");

        let mut output = Vec::new();
        run_script(&wallet, script.path(), &mut output).unwrap();

        assert_eq!(wallet.balance(), Bitcoin::new(532, 2));
        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with(&format!(
            "User \"Nikita\" balance is 5.3200 BTC\n{MENU}Exit\n"
        )));
    }

    #[test]
    fn test_run_script_missing_file() {
        let wallet = Wallet::new("Nikita", Bitcoin::new(1, 0));

        let result = run_script(&wallet, Path::new("does/not/exist.txt"), Vec::new());

        assert_eq!(
            result.unwrap_err(),
            ShellError::FileNotFound {
                path: "does/not/exist.txt".to_string()
            }
        );
    }

    #[test]
    fn test_write_failure_is_fatal() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(ErrorKind::BrokenPipe, "Broken pipe"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let wallet = Wallet::new("Nikita", Bitcoin::new(1, 0));
        let result = Shell::new(&wallet, BrokenPipe).run("1\n".as_bytes());

        assert!(matches!(result.unwrap_err(), ShellError::IoError { .. }));
    }
}
