use crate::conf::ConfError;
use crate::shared::paths::with_trailing_slash;
use serde::Serialize;

/// One configuration value. Serializes untagged so YAML and JSON output is
/// the plain scalar/sequence/mapping, never the variant name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfValue {
    Str(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
    SourceStatement(SourceStatement),
    Back2Top(Back2Top),
    Toc(Toc),
}

impl ConfValue {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceStatement {
    pub enable: bool,
    pub content: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Back2Top {
    pub enable: bool,
    pub text: String,
    pub link: String,
    pub insert_deep: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toc {
    pub enable: bool,
    pub title: String,
    pub depth: i64,
    pub bullets: String,
}

/// One configuration item: help text, compiled-in default and the current
/// value. `value` starts equal to `default` and is overwritten at most once
/// by the prompt flow.
#[derive(Debug, Clone)]
pub struct Field {
    pub key: &'static str,
    pub desc: String,
    pub default: ConfValue,
    pub value: ConfValue,
}

impl Field {
    pub(crate) fn new(key: &'static str, raw_desc: &str, default: ConfValue) -> Self {
        Self {
            key,
            desc: normalize_desc(raw_desc),
            value: default.clone(),
            default,
        }
    }
}

/// A named, ordered group of fields. `name` is rendered only as a leading
/// comment in the emitted file; it is never a field.
#[derive(Debug, Clone)]
pub struct Section {
    pub key: &'static str,
    pub name: &'static str,
    pub fields: Vec<Field>,
}

/// The full ordered schema. Section and field declaration order is
/// preserved through prompting, the slim projection and file emission.
#[derive(Debug, Clone)]
pub struct ConfTemplate {
    pub sections: Vec<Section>,
}

impl ConfTemplate {
    pub fn section(&self, section_key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == section_key)
    }

    pub fn field(&self, section_key: &str, field_key: &str) -> Option<&Field> {
        self.section(section_key)?
            .fields
            .iter()
            .find(|f| f.key == field_key)
    }

    pub fn value(&self, section_key: &str, field_key: &str) -> Option<&ConfValue> {
        self.field(section_key, field_key).map(|f| &f.value)
    }

    pub fn value_str(&self, section_key: &str, field_key: &str) -> Option<&str> {
        self.value(section_key, field_key)?.as_str()
    }

    pub fn set(
        &mut self,
        section_key: &str,
        field_key: &str,
        value: ConfValue,
    ) -> Result<(), ConfError> {
        let field = self
            .sections
            .iter_mut()
            .find(|s| s.key == section_key)
            .and_then(|s| s.fields.iter_mut().find(|f| f.key == field_key))
            .ok_or_else(|| ConfError::UnknownField {
                section: section_key.to_string(),
                field: field_key.to_string(),
            })?;
        field.value = value;
        Ok(())
    }

    pub fn set_str(
        &mut self,
        section_key: &str,
        field_key: &str,
        value: impl Into<String>,
    ) -> Result<(), ConfError> {
        self.set(section_key, field_key, ConfValue::Str(value.into()))
    }
}

/// Help-text blocks are embedded with an empty first and last line (an
/// indentation artifact of multi-line literals). Strip exactly those two
/// lines; interior lines are kept verbatim.
pub fn normalize_desc(raw: &str) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();
    if lines.len() <= 2 {
        return String::new();
    }
    lines[1..lines.len() - 1].join("\n")
}

/// Default link prefix, derived from already-resolved answers at the moment
/// the link-prefix prompt is shown.
pub fn link_prefix_default(owner: &str, repo: &str, branch: &str, source_dir: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/{owner}/{repo}/{branch}/{}",
        with_trailing_slash(source_dir)
    )
}
