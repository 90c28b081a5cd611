use crate::conf::template::{ConfTemplate, Field};
use crate::conf::ConfError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONF_FILE_NAME: &str = "isubo.conf.yml";

pub const HEADER: &str = "# Isubo Configuration
## Docs: https://github.com/isaaxite/deploy-posts-to-github-issue/blob/main/README.md
## Source: https://github.com/isaaxite/deploy-posts-to-github-issue";

fn encode_field(field: &Field) -> Result<String, ConfError> {
    let entry = BTreeMap::from([(field.key, &field.value)]);
    serde_yaml::to_string(&entry).map_err(|source| ConfError::Encode {
        key: field.key.to_string(),
        source,
    })
}

/// Renders the filled template as the commented configuration file: the
/// header banner, then one chapter per section. Each chapter opens with a
/// `# <section name>` comment and lists every field as its help text
/// followed by a one-line (or block) YAML assignment.
pub fn render_conf(conf: &ConfTemplate) -> Result<String, ConfError> {
    let mut blocks = vec![format!("{HEADER}\n")];
    for section in &conf.sections {
        let mut chapter = vec![format!("# {}\n", section.name)];
        for field in &section.fields {
            chapter.push(field.desc.clone());
            chapter.push(encode_field(field)?);
        }
        blocks.push(format!("{}\n", chapter.join("\n")));
    }
    Ok(blocks.join("\n"))
}

/// Writes `isubo.conf.yml` into `dir` in a single write, overwriting any
/// existing file without confirmation.
pub fn write_conf(conf: &ConfTemplate, dir: &Path) -> Result<PathBuf, ConfError> {
    let body = render_conf(conf)?;
    let path = dir.join(CONF_FILE_NAME);
    fs::write(&path, body).map_err(|source| ConfError::Write {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}
