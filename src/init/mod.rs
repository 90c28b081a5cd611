pub mod error;
pub mod prompter;
pub mod source_dir;
pub mod token;

pub use error::InitError;
pub use prompter::{PromptError, Prompter, SelectChoice, TermPrompter};
pub use token::TokenSetting;

use crate::conf::{
    conf_slim, default_template, link_prefix_default, write_conf, ConfTemplate, FIELD_BRANCH,
    FIELD_LINK_PREFIX, FIELD_OWNER, FIELD_REPO, FIELD_SOURCE_DIR, FIELD_TOKEN,
    SECTION_GITHUB_INFO, SECTION_LINK_FORMAT, SECTION_POST_SOURCE,
};
use crate::shared::hinter;
use crossterm::style::Stylize;
use log::debug;
use std::path::{Path, PathBuf};
use token::{format_env_token, token_mode_choices, token_mode_from_key, DEF_TOKEN_ENV_NAME};

const MANUAL_URL: &str =
    "https://github.com/isaaxite/deploy-posts-to-github-issue/blob/main/MANUAL.md";

/// Runs the whole interactive flow: fixed prompt sequence, confirmation
/// dump, env-var reminder, then a single write of `isubo.conf.yml` into
/// `workdir`. Any fatal error leaves no file behind.
pub fn run_init<P: Prompter + ?Sized>(prompter: &mut P, workdir: &Path) -> Result<PathBuf, InitError> {
    let mut conf = default_template();
    hinter::streamlog(&format!(
        "For detailed instructions on the following settings, please refer to {MANUAL_URL}"
    ));

    init_owner(prompter, &mut conf)?;
    init_repo(prompter, &mut conf)?;
    init_branch(prompter, &mut conf)?;
    let token_setting = init_token(prompter, &mut conf)?;
    source_dir::init_source_dir(prompter, workdir, &mut conf)?;
    init_link_prefix(prompter, &mut conf)?;

    let slim = conf_slim(&conf)?;
    let confirm =
        serde_json::to_string_pretty(&slim).map_err(|source| InitError::Confirm { source })?;
    hinter::streamlog(&confirm);

    if token_setting == TokenSetting::EnvironmentVariables {
        let token_name = conf
            .value_str(SECTION_GITHUB_INFO, FIELD_TOKEN)
            .unwrap_or_default()
            .trim_start_matches('$')
            .to_string();
        hinter::warn(&format!(
            "Please make sure you have set the environment variable named {}.",
            token_name.red()
        ));
    }

    let path = write_conf(&conf, workdir)?;
    debug!("configuration written to {}", path.display());
    Ok(path)
}

fn required_text<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
    initial: Option<&str>,
    field: &'static str,
) -> Result<String, InitError> {
    let value = prompter.text(message, initial)?;
    if value.is_empty() {
        return Err(InitError::MissingAnswer { field });
    }
    Ok(value)
}

fn init_owner<P: Prompter + ?Sized>(
    prompter: &mut P,
    conf: &mut ConfTemplate,
) -> Result<(), InitError> {
    let message = format!("Set your {} on GitHub", "<owner>".red());
    let value = required_text(prompter, &message, None, FIELD_OWNER)?;
    conf.set_str(SECTION_GITHUB_INFO, FIELD_OWNER, value)?;
    Ok(())
}

fn init_repo<P: Prompter + ?Sized>(
    prompter: &mut P,
    conf: &mut ConfTemplate,
) -> Result<(), InitError> {
    let message = format!("Set your {} on GitHub", "<repo>".red());
    let value = required_text(prompter, &message, None, FIELD_REPO)?;
    conf.set_str(SECTION_GITHUB_INFO, FIELD_REPO, value)?;
    Ok(())
}

fn init_branch<P: Prompter + ?Sized>(
    prompter: &mut P,
    conf: &mut ConfTemplate,
) -> Result<(), InitError> {
    let owner = conf
        .value_str(SECTION_GITHUB_INFO, FIELD_OWNER)
        .unwrap_or_default()
        .to_string();
    let repo = conf
        .value_str(SECTION_GITHUB_INFO, FIELD_REPO)
        .unwrap_or_default()
        .to_string();
    let initial = conf
        .value_str(SECTION_GITHUB_INFO, FIELD_BRANCH)
        .unwrap_or_default()
        .to_string();
    let message = format!("Set your {} on {owner}/{repo}", "[branch]".yellow());
    let value = required_text(prompter, &message, Some(&initial), FIELD_BRANCH)?;
    conf.set_str(SECTION_GITHUB_INFO, FIELD_BRANCH, value)?;
    Ok(())
}

fn init_token<P: Prompter + ?Sized>(
    prompter: &mut P,
    conf: &mut ConfTemplate,
) -> Result<TokenSetting, InitError> {
    let message = format!("Choose how to set {}", "<token>".red());
    let mode = token_mode_from_key(&prompter.select(&message, &token_mode_choices())?);

    let token = match mode {
        TokenSetting::Plaintext => {
            let message = format!("Set the value of the {}", "<token>".red());
            required_text(prompter, &message, None, FIELD_TOKEN)?
        }
        TokenSetting::EnvironmentVariables => {
            let message = format!("Set the name of the {}", "<token>".red());
            let name = required_text(prompter, &message, Some(DEF_TOKEN_ENV_NAME), FIELD_TOKEN)?;
            format_env_token(&name)
        }
    };

    conf.set_str(SECTION_GITHUB_INFO, FIELD_TOKEN, token)?;
    Ok(mode)
}

fn init_link_prefix<P: Prompter + ?Sized>(
    prompter: &mut P,
    conf: &mut ConfTemplate,
) -> Result<(), InitError> {
    let owner = conf
        .value_str(SECTION_GITHUB_INFO, FIELD_OWNER)
        .unwrap_or_default()
        .to_string();
    let repo = conf
        .value_str(SECTION_GITHUB_INFO, FIELD_REPO)
        .unwrap_or_default()
        .to_string();
    let branch = conf
        .value_str(SECTION_GITHUB_INFO, FIELD_BRANCH)
        .unwrap_or_default()
        .to_string();
    let source_dir = conf
        .value_str(SECTION_POST_SOURCE, FIELD_SOURCE_DIR)
        .unwrap_or_default()
        .to_string();
    let initial = link_prefix_default(&owner, &repo, &branch, &source_dir);
    let message = format!(
        "Set the resource access link prefix, {}",
        "[link_prefix]".yellow()
    );
    let value = required_text(prompter, &message, Some(&initial), FIELD_LINK_PREFIX)?;
    conf.set_str(SECTION_LINK_FORMAT, FIELD_LINK_PREFIX, value)?;
    Ok(())
}
