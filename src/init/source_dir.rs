use crate::conf::{ConfTemplate, DEF_SOURCE_DIR, FIELD_SOURCE_DIR, SECTION_POST_SOURCE};
use crate::init::error::InitError;
use crate::init::prompter::{Prompter, SelectChoice};
use crate::shared::hinter;
use crate::shared::paths::with_trailing_slash;
use crossterm::style::Stylize;
use log::debug;
use std::fs;
use std::path::Path;

pub const NEW_FOLDER: &str = "new folder";

/// Tooling directories that never hold posts.
const EXCLUDED_DIRS: [&str; 3] = ["bin", "scripts", "node_modules"];

fn read_dir_error(workdir: &Path, source: std::io::Error) -> InitError {
    InitError::ReadDir {
        path: workdir.display().to_string(),
        source,
    }
}

/// Candidate source directories: non-hidden directories of `workdir` minus
/// the excluded tooling names, each offered with a trailing slash, plus the
/// `new folder` sentinel.
pub(crate) fn source_dir_choices(workdir: &Path) -> Result<Vec<SelectChoice>, InitError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(workdir).map_err(|source| read_dir_error(workdir, source))? {
        let entry = entry.map_err(|source| read_dir_error(workdir, source))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_str()) {
            continue;
        }
        let file_type = entry
            .file_type()
            .map_err(|source| read_dir_error(workdir, source))?;
        if !file_type.is_dir() {
            continue;
        }
        names.push(name);
    }
    names.sort();

    let mut choices: Vec<SelectChoice> = names
        .iter()
        .map(|name| {
            let slashed = with_trailing_slash(name);
            SelectChoice::new(slashed.clone(), slashed)
        })
        .collect();
    choices.push(SelectChoice::new(NEW_FOLDER, NEW_FOLDER));
    Ok(choices)
}

/// Asks for a fresh directory name and creates it under `workdir`. Both a
/// name collision and a failed creation are reported and re-asked; the loop
/// ends on success or when the user aborts the prompt. Created directories
/// are not rolled back on later failures.
pub(crate) fn create_new_folder<P: Prompter + ?Sized>(
    prompter: &mut P,
    workdir: &Path,
    default_name: &str,
) -> Result<String, InitError> {
    let message = format!(
        "New a directory where posts are stored, {}",
        "[source_dir]".yellow()
    );
    loop {
        let name = prompter.text(&message, Some(default_name))?;
        if name.is_empty() {
            return Err(InitError::MissingAnswer {
                field: FIELD_SOURCE_DIR,
            });
        }
        if workdir.join(&name).exists() {
            hinter::error(&format!("[{name}] already existed!"));
            continue;
        }
        match fs::create_dir(workdir.join(&name)) {
            Ok(()) => {
                debug!("created source directory `{name}`");
                return Ok(name);
            }
            Err(err) => hinter::error(&err.to_string()),
        }
    }
}

pub(crate) fn init_source_dir<P: Prompter + ?Sized>(
    prompter: &mut P,
    workdir: &Path,
    conf: &mut ConfTemplate,
) -> Result<(), InitError> {
    let choices = source_dir_choices(workdir)?;
    let message = format!(
        "Select a existed directory to store the posts, {}",
        "[source_dir]".yellow()
    );
    let mut value = prompter.select(&message, &choices)?;
    if value == NEW_FOLDER {
        let default_name = conf
            .value_str(SECTION_POST_SOURCE, FIELD_SOURCE_DIR)
            .unwrap_or(DEF_SOURCE_DIR)
            .to_string();
        value = create_new_folder(prompter, workdir, &default_name)?;
    }
    conf.set_str(SECTION_POST_SOURCE, FIELD_SOURCE_DIR, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::prompter::PromptError;
    use std::collections::VecDeque;
    use tempfile::tempdir;

    struct ScriptedText {
        answers: VecDeque<String>,
        asked: usize,
    }

    impl ScriptedText {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|s| s.to_string()).collect(),
                asked: 0,
            }
        }
    }

    impl Prompter for ScriptedText {
        fn text(&mut self, _message: &str, initial: Option<&str>) -> Result<String, PromptError> {
            self.asked += 1;
            match self.answers.pop_front() {
                Some(answer) if answer.is_empty() => {
                    Ok(initial.unwrap_or_default().to_string())
                }
                Some(answer) => Ok(answer),
                None => Err(PromptError::Aborted),
            }
        }

        fn select(&mut self, _message: &str, _choices: &[SelectChoice]) -> Result<String, PromptError> {
            Err(PromptError::Aborted)
        }
    }

    #[test]
    fn choices_skip_hidden_excluded_and_plain_files() {
        let temp = tempdir().expect("tempdir");
        for dir in [".git", "bin", "scripts", "node_modules", "posts", "drafts"] {
            fs::create_dir(temp.path().join(dir)).expect("create dir");
        }
        fs::write(temp.path().join("notes.md"), "x").expect("create file");

        let choices = source_dir_choices(temp.path()).expect("choices");
        let values: Vec<&str> = choices.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["drafts/", "posts/", NEW_FOLDER]);
    }

    #[test]
    fn new_folder_retries_past_existing_names_then_creates() {
        let temp = tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("taken")).expect("create dir");
        fs::create_dir(temp.path().join("also-taken")).expect("create dir");

        let mut prompter = ScriptedText::new(&["taken", "also-taken", "fresh"]);
        let name =
            create_new_folder(&mut prompter, temp.path(), "source/").expect("create folder");

        assert_eq!(name, "fresh");
        assert_eq!(prompter.asked, 3);
        assert!(temp.path().join("fresh").is_dir());
    }

    #[test]
    fn new_folder_retries_after_a_failed_creation() {
        let temp = tempdir().expect("tempdir");
        // A name with a missing parent makes create_dir fail without the
        // path existing beforehand.
        let mut prompter = ScriptedText::new(&["missing/parent", "fresh"]);
        let name =
            create_new_folder(&mut prompter, temp.path(), "source/").expect("create folder");

        assert_eq!(name, "fresh");
        assert_eq!(prompter.asked, 2);
        assert!(temp.path().join("fresh").is_dir());
    }

    #[test]
    fn new_folder_abort_propagates() {
        let temp = tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("taken")).expect("create dir");

        // Script runs dry after colliding, which the scripted prompter
        // reports as an abort.
        let mut prompter = ScriptedText::new(&["taken"]);
        let err = create_new_folder(&mut prompter, temp.path(), "source/")
            .expect_err("abort should propagate");
        assert!(matches!(err, InitError::Prompt(PromptError::Aborted)));
    }
}
