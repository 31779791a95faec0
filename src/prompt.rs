//! Operator interaction for raygen.

use dialoguer::Confirm;

use crate::error::Result;

/// Asks the operator yes/no questions.
pub trait Prompter {
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Terminal prompter built on dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(message).default(false).interact()?)
    }
}

/// Prompter with a fixed answer, for non-interactive runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompter(pub bool);

impl Prompter for FixedPrompter {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(self.0)
    }
}
