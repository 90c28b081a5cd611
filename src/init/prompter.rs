use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// One selectable option: `title` is what the terminal shows, `value` is
/// what the flow stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectChoice {
    pub title: String,
    pub value: String,
}

impl SelectChoice {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("prompt aborted")]
    Aborted,
    #[error("terminal prompt failed: {source}")]
    Terminal {
        #[from]
        source: dialoguer::Error,
    },
}

/// Seam between the prompt flow and the terminal. The flow never touches
/// terminal rendering directly, which keeps it scriptable in tests.
pub trait Prompter {
    /// Free-text question. `initial` is offered as the accept-on-enter
    /// default. An empty submission is returned as-is; emptiness policy
    /// belongs to the caller.
    fn text(&mut self, message: &str, initial: Option<&str>) -> Result<String, PromptError>;

    /// Single-choice question. Returns the chosen choice's `value`.
    fn select(&mut self, message: &str, choices: &[SelectChoice]) -> Result<String, PromptError>;
}

/// Interactive prompter backed by dialoguer.
#[derive(Default)]
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TermPrompter {
    fn text(&mut self, message: &str, initial: Option<&str>) -> Result<String, PromptError> {
        let value = match initial {
            Some(initial) => Input::<String>::with_theme(&self.theme)
                .with_prompt(message)
                .allow_empty(true)
                .default(initial.to_string())
                .interact_text()?,
            None => Input::<String>::with_theme(&self.theme)
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()?,
        };
        Ok(value)
    }

    fn select(&mut self, message: &str, choices: &[SelectChoice]) -> Result<String, PromptError> {
        let titles: Vec<&str> = choices.iter().map(|choice| choice.title.as_str()).collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&titles)
            .default(0)
            .interact_opt()?;
        picked
            .and_then(|index| choices.get(index))
            .map(|choice| choice.value.clone())
            .ok_or(PromptError::Aborted)
    }
}
