//! Bundle selection: the interactive prompt boundary
//!
//! Workflows never talk to the terminal directly; they go through [`Select`]
//! so selection can come from inquire prompts, CLI arguments, or test
//! doubles. Returning `None` means the user cancelled, which aborts the
//! workflow without an error.

use inquire::{Confirm, MultiSelect, Select as InquireSelectPrompt};

use crate::error::{ModkeepError, Result};

/// Selection collaborator boundary
pub trait Select {
    /// Pick exactly one candidate archive to install
    fn pick_install_target(&self, candidates: &[String]) -> Result<Option<String>>;

    /// Pick zero or more dependencies for `bundle` from the installed set
    fn pick_dependencies(&self, bundle: &str, installed: &[String]) -> Result<Option<Vec<String>>>;

    /// Pick the installed bundle to remove
    fn pick_removal_target(&self, installed: &[String]) -> Result<Option<String>>;
}

/// Interactive selection via inquire prompts
pub struct InquireSelect;

impl Select for InquireSelect {
    fn pick_install_target(&self, candidates: &[String]) -> Result<Option<String>> {
        let choice = InquireSelectPrompt::new("Select a bundle to install", candidates.to_vec())
            .with_page_size(10)
            .with_help_message("  ↑↓ navigate  enter confirm  type to filter  esc cancel")
            .prompt_skippable()?;
        Ok(choice)
    }

    fn pick_dependencies(&self, bundle: &str, installed: &[String]) -> Result<Option<Vec<String>>> {
        if installed.is_empty() {
            return Ok(Some(Vec::new()));
        }
        let prompt = format!("Select dependencies for {bundle}");
        let choice = MultiSelect::new(&prompt, installed.to_vec())
            .with_page_size(10)
            .with_help_message(
                "  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel",
            )
            .prompt_skippable()?;
        Ok(choice)
    }

    fn pick_removal_target(&self, installed: &[String]) -> Result<Option<String>> {
        if installed.is_empty() {
            return Ok(None);
        }
        let choice = InquireSelectPrompt::new("Select a bundle to remove", installed.to_vec())
            .with_page_size(10)
            .with_help_message("  ↑↓ navigate  enter confirm  type to filter  esc cancel")
            .prompt_skippable()?;
        Ok(choice)
    }
}

/// Non-interactive selection driven by CLI arguments
pub struct PresetSelect {
    pub target: String,
    pub dependencies: Vec<String>,
}

impl Select for PresetSelect {
    fn pick_install_target(&self, candidates: &[String]) -> Result<Option<String>> {
        if candidates.iter().any(|c| c == &self.target) {
            Ok(Some(self.target.clone()))
        } else {
            Err(ModkeepError::UnknownBundle {
                name: self.target.clone(),
            })
        }
    }

    fn pick_dependencies(
        &self,
        _bundle: &str,
        _installed: &[String],
    ) -> Result<Option<Vec<String>>> {
        Ok(Some(self.dependencies.clone()))
    }

    fn pick_removal_target(&self, installed: &[String]) -> Result<Option<String>> {
        if installed.iter().any(|c| c == &self.target) {
            Ok(Some(self.target.clone()))
        } else {
            Err(ModkeepError::UnknownBundle {
                name: self.target.clone(),
            })
        }
    }
}

/// Ask for confirmation before a removal; `assume_yes` skips the prompt
pub fn confirm_removal(name: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let prompt = format!("Remove '{name}'?");
    let confirmed = Confirm::new(&prompt)
        .with_default(true)
        .with_help_message("Dependencies no longer required by anything will also be removed")
        .prompt_skippable()?;
    Ok(confirmed.unwrap_or(false))
}
