//! Prompter selection and the interactive terminal prompter.
//!
//! The terminal prompter needs the `interactive` feature, a terminal on
//! stdin and `prompt.interactive = true`. Otherwise answers come from
//! `BACKSTRAP_PROJECT_NAME` / `BACKSTRAP_FRAMEWORK`.

use std::io::IsTerminal as _;

use tracing::debug;

use backstrap_adapters::EnvPrompter;
use backstrap_core::application::ports::Prompter;

use crate::config::AppConfig;

/// Where prompt answers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSource {
    Terminal,
    Environment,
}

impl PromptSource {
    /// Decide the source. The terminal is only used when every condition
    /// allows it.
    pub fn choose(feature_enabled: bool, config_interactive: bool, stdin_is_tty: bool) -> Self {
        if feature_enabled && config_interactive && stdin_is_tty {
            Self::Terminal
        } else {
            Self::Environment
        }
    }
}

/// Build the prompter for this invocation.
pub fn build_prompter(config: &AppConfig, no_color: bool) -> Box<dyn Prompter> {
    let source = PromptSource::choose(
        cfg!(feature = "interactive"),
        config.prompt.interactive,
        std::io::stdin().is_terminal(),
    );
    debug!(?source, "prompt source selected");

    match source {
        #[cfg(feature = "interactive")]
        PromptSource::Terminal => Box::new(interactive::DialoguerPrompter::new(no_color)),
        _ => {
            let _ = no_color;
            Box::new(EnvPrompter::from_env())
        }
    }
}

#[cfg(feature = "interactive")]
pub mod interactive {
    //! `dialoguer`-backed prompter.

    use std::io;

    use console::Style;
    use dialoguer::{
        Input, Select,
        theme::{ColorfulTheme, SimpleTheme, Theme},
    };

    use backstrap_core::{
        application::{ApplicationError, ports::Prompter},
        domain::FrameworkChoice,
        error::{BackstrapError, BackstrapResult},
    };

    /// xterm-256 "light salmon".
    const LIGHT_SALMON: u8 = 216;

    pub const NAME_PROMPT: &str = "Please provide a project name";
    pub const FRAMEWORK_PROMPT: &str = "SELECT THE FRAMEWORK";

    /// Asks on the terminal.
    pub struct DialoguerPrompter {
        theme: Box<dyn Theme + Send + Sync>,
    }

    impl DialoguerPrompter {
        pub fn new(no_color: bool) -> Self {
            let theme: Box<dyn Theme + Send + Sync> = if no_color {
                Box::new(SimpleTheme)
            } else {
                Box::new(ColorfulTheme {
                    active_item_style: Style::new().color256(LIGHT_SALMON).bold(),
                    ..ColorfulTheme::default()
                })
            };
            Self { theme }
        }
    }

    impl Prompter for DialoguerPrompter {
        fn resolve_project_name(&self) -> BackstrapResult<String> {
            Input::<String>::with_theme(self.theme.as_ref())
                .with_prompt(NAME_PROMPT)
                .interact_text()
                .map_err(map_dialoguer_error)
        }

        fn resolve_framework_choice(&self) -> BackstrapResult<FrameworkChoice> {
            let labels: Vec<&str> = FrameworkChoice::ALL.iter().map(|c| c.label()).collect();
            let index = Select::with_theme(self.theme.as_ref())
                .with_prompt(FRAMEWORK_PROMPT)
                .items(&labels)
                .default(0)
                .interact()
                .map_err(map_dialoguer_error)?;

            FrameworkChoice::ALL
                .get(index)
                .copied()
                .ok_or_else(|| {
                    ApplicationError::PromptFailed {
                        reason: format!("selection {index} is out of range"),
                    }
                    .into()
                })
        }
    }

    /// Ctrl-C surfaces as `Interrupted`; everything else is a terminal fault.
    pub(crate) fn map_dialoguer_error(err: dialoguer::Error) -> BackstrapError {
        match err {
            dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
                ApplicationError::PromptCancelled.into()
            }
            other => ApplicationError::PromptFailed {
                reason: other.to_string(),
            }
            .into(),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_needs_every_condition() {
        assert_eq!(PromptSource::choose(true, true, true), PromptSource::Terminal);
        assert_eq!(PromptSource::choose(false, true, true), PromptSource::Environment);
        assert_eq!(PromptSource::choose(true, false, true), PromptSource::Environment);
        assert_eq!(PromptSource::choose(true, true, false), PromptSource::Environment);
    }
}
