//! Interactive confirmation.
//!
//! Deletion requires an explicit yes/no answer from the user. The prompt is
//! behind a trait so the control flow can be exercised in tests without a
//! real terminal.

use std::io::{stdin, stdout, Write};

use crate::{PostError, Result};

/// Answers yes/no questions on behalf of the user.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Prompts on stdout and reads the answer from stdin. Anything other than
/// `y`/`yes` counts as a decline.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{} [y/N]: ", prompt);
        stdout().flush().map_err(PostError::Io)?;

        let mut input = String::new();
        stdin().read_line(&mut input).map_err(PostError::Io)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}

/// Always answers with a fixed decision. Used in tests and for `--force`.
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}
