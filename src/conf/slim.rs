use crate::conf::template::ConfTemplate;
use crate::conf::ConfError;
use serde_yaml::{Mapping, Value};

/// Value-only projection of a filled template, used for the confirmation
/// dump. Section `name` is dropped; each field collapses to its value.
/// `serde_yaml::Mapping` keeps insertion order, so the projection mirrors
/// the declared schema order.
pub fn conf_slim(conf: &ConfTemplate) -> Result<Mapping, ConfError> {
    let mut slim = Mapping::new();
    for section in &conf.sections {
        let mut fields = Mapping::new();
        for field in &section.fields {
            let value = serde_yaml::to_value(&field.value).map_err(|source| ConfError::Encode {
                key: field.key.to_string(),
                source,
            })?;
            fields.insert(Value::String(field.key.to_string()), value);
        }
        slim.insert(
            Value::String(section.key.to_string()),
            Value::Mapping(fields),
        );
    }
    Ok(slim)
}
