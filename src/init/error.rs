use crate::conf::ConfError;
use crate::init::prompter::PromptError;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("no value provided for `{field}`")]
    MissingAnswer { field: &'static str },
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Conf(#[from] ConfError),
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode confirmation output: {source}")]
    Confirm {
        #[source]
        source: serde_json::Error,
    },
}
