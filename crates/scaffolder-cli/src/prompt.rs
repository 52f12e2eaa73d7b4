//! Interactive prompts for answers not given on the command line.
//!
//! Prompts only appear when the `interactive` feature is compiled in,
//! `--no-input` is absent and both stdin and stderr are terminals. Otherwise
//! every question falls back to its default, or fails with
//! [`CliError::MissingArgument`] when there is none.

use std::io::{self, IsTerminal};

use crate::{
    cli::GlobalArgs,
    error::{CliError, CliResult},
};

pub struct Prompter {
    enabled: bool,
}

impl Prompter {
    pub fn new(global: &GlobalArgs) -> Self {
        let enabled = cfg!(feature = "interactive")
            && !global.no_input
            && io::stdin().is_terminal()
            && io::stderr().is_terminal();
        tracing::debug!(enabled, "Prompter ready");
        Self { enabled }
    }

    /// The given value, else a prompted one, else `default`.
    pub fn text(
        &self,
        given: Option<String>,
        argument: &'static str,
        prompt: &str,
        default: Option<String>,
    ) -> CliResult<String> {
        if let Some(value) = given {
            return Ok(value);
        }
        if !self.enabled {
            return default.ok_or(CliError::MissingArgument { argument });
        }
        backend::input(prompt, default)
    }

    /// Like [`Self::text`], but a missing answer stays `None` when prompts
    /// are off so the generator resolves it from the repository.
    pub fn optional(&self, given: Option<String>, prompt: &str, default: Option<String>) -> CliResult<Option<String>> {
        if given.is_some() || !self.enabled {
            return Ok(given);
        }
        backend::input(prompt, default).map(Some)
    }

    pub fn is_interactive(&self) -> bool {
        self.enabled
    }

    /// Yes/no question; `default` when prompts are off.
    pub fn confirm(&self, prompt: &str, default: bool) -> CliResult<bool> {
        if !self.enabled {
            return Ok(default);
        }
        backend::confirm(prompt, default)
    }

    /// Pick any number of `items`; the preselected ones when prompts are off.
    pub fn select_many(&self, prompt: &str, items: &[String], preselected: &[bool]) -> CliResult<Vec<String>> {
        let chosen = if self.enabled && !items.is_empty() {
            backend::multi_select(prompt, items, preselected)?
        } else {
            preselected
                .iter()
                .enumerate()
                .filter_map(|(i, on)| on.then_some(i))
                .collect()
        };
        Ok(chosen.into_iter().filter_map(|i| items.get(i).cloned()).collect())
    }
}

#[cfg(feature = "interactive")]
mod backend {
    use dialoguer::{Confirm, Input, MultiSelect, theme::ColorfulTheme};

    use crate::error::{CliError, CliResult};

    impl From<dialoguer::Error> for CliError {
        fn from(err: dialoguer::Error) -> Self {
            match err {
                // Ctrl-C while a prompt is open.
                dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => CliError::Cancelled,
                other => CliError::Prompt {
                    message: other.to_string(),
                },
            }
        }
    }

    pub(super) fn input(prompt: &str, default: Option<String>) -> CliResult<String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default);
        }
        Ok(input.interact_text()?.trim().to_string())
    }

    pub(super) fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    pub(super) fn multi_select(prompt: &str, items: &[String], preselected: &[bool]) -> CliResult<Vec<usize>> {
        Ok(MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .defaults(preselected)
            .interact()?)
    }
}

#[cfg(not(feature = "interactive"))]
mod backend {
    use crate::error::{CliError, CliResult};

    fn unavailable() -> CliError {
        CliError::Prompt {
            message: "built without the `interactive` feature".into(),
        }
    }

    pub(super) fn input(_prompt: &str, _default: Option<String>) -> CliResult<String> {
        Err(unavailable())
    }

    pub(super) fn confirm(_prompt: &str, _default: bool) -> CliResult<bool> {
        Err(unavailable())
    }

    pub(super) fn multi_select(_prompt: &str, _items: &[String], _preselected: &[bool]) -> CliResult<Vec<usize>> {
        Err(unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disabled() -> Prompter {
        Prompter { enabled: false }
    }

    #[test]
    fn given_value_wins() {
        let answer = disabled()
            .text(Some("bff".into()), "NAME", "Service name", None)
            .unwrap();
        assert_eq!(answer, "bff");
    }

    #[test]
    fn default_used_without_prompt() {
        let answer = disabled()
            .text(None, "--root-package", "Root package", Some("com.acme.bff".into()))
            .unwrap();
        assert_eq!(answer, "com.acme.bff");
    }

    #[test]
    fn missing_answer_without_prompt_is_an_error() {
        let err = disabled().text(None, "NAME", "Lib name", None).unwrap_err();
        assert!(matches!(err, CliError::MissingArgument { argument: "NAME" }));
    }

    #[test]
    fn select_many_keeps_preselection() {
        let items = vec!["observability".to_string(), "shared-kernel".to_string()];
        let picked = disabled()
            .select_many("Internal libs", &items, &[false, true])
            .unwrap();
        assert_eq!(picked, vec!["shared-kernel".to_string()]);
    }

    #[test]
    fn optional_answer_left_to_generator() {
        let prompter = disabled();
        assert!(!prompter.is_interactive());
        assert_eq!(
            prompter.optional(None, "Root package", Some("com.acme.bff".into())).unwrap(),
            None
        );
        assert_eq!(
            prompter.optional(Some("org.example".into()), "Root package", None).unwrap(),
            Some("org.example".into())
        );
    }

    #[test]
    fn confirm_returns_default() {
        assert!(disabled().confirm("Add workflows?", true).unwrap());
    }
}
