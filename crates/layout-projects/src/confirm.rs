//! Yes/no confirmation prompts

use crate::error::Result;
use dialoguer::Confirm;

/// Asks the user a yes/no question
///
/// Any `Fn(&str) -> bool` is a confirmer, which keeps tests non-interactive:
///
/// ```
/// use layout_projects::Confirmer;
///
/// let always = |_: &str| true;
/// assert!(always.confirm("Overwrite?").unwrap());
/// ```
pub trait Confirmer {
    /// Ask `message`; `Ok(true)` means the user agreed
    fn confirm(&self, message: &str) -> Result<bool>;
}

impl<F> Confirmer for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> Result<bool> {
        Ok(self(message))
    }
}

/// Interactive terminal prompt; defaults to "no"
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, message: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}
