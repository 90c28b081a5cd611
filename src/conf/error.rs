#[derive(Debug, thiserror::Error)]
pub enum ConfError {
    #[error("unknown configuration field `{section}.{field}`")]
    UnknownField { section: String, field: String },
    #[error("failed to encode yaml for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to write file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
