//! Sorts raw `type_list` entries into enum and struct specs.
//!
//! Each entry is a single-key object `{ "<TypeName>": { "format": ..., ... } }`.
//! Known formats are `"enum_class"` and `"struct"`; anything else is either
//! skipped or rejected depending on [`FormatPolicy`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{GenError, Result};
use crate::model::{EnumEntry, EnumSpec, FieldSpec, StructSpec, TypeDescription, TypeName, TypeRegistry};

/// What to do with a `format` the generator does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatPolicy {
    /// Log a warning and leave the entry out of the header.
    #[default]
    Permissive,
    /// Fail the run.
    Strict,
}

impl TypeRegistry {
    pub fn classify(type_list: &[Value], policy: FormatPolicy) -> Result<Self> {
        let mut registry = TypeRegistry::default();

        for (index, entry) in type_list.iter().enumerate() {
            let (name, body) = single_entry(index, entry)?;
            match describe(index, name, body, policy)? {
                Some(TypeDescription::EnumClass(spec)) => {
                    registry.enums.insert(name.to_string(), spec);
                }
                Some(TypeDescription::Struct(spec)) => {
                    registry.structs.insert(name.to_string(), spec);
                }
                None => {}
            }
        }

        tracing::debug!(
            "classified {} enum class(es), {} struct(s)",
            registry.enums.len(),
            registry.structs.len()
        );
        Ok(registry)
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.structs.is_empty()
    }
}

/// Unwrap `{ name: body }`.
fn single_entry(index: usize, entry: &Value) -> Result<(&str, &Map<String, Value>)> {
    let obj = entry
        .as_object()
        .ok_or_else(|| GenError::shape(index, None, "entry is not an object"))?;

    let mut iter = obj.iter();
    let (name, body) = iter
        .next()
        .ok_or_else(|| GenError::shape(index, None, "entry holds no type"))?;
    if iter.next().is_some() {
        return Err(GenError::shape(
            index,
            Some(name),
            format!("entry must hold exactly one type, found {}", obj.len()),
        ));
    }

    let body = body
        .as_object()
        .ok_or_else(|| GenError::shape(index, Some(name), "type body is not an object"))?;
    Ok((name, body))
}

fn describe(
    index: usize,
    name: &str,
    body: &Map<String, Value>,
    policy: FormatPolicy,
) -> Result<Option<TypeDescription>> {
    let format = body
        .get("format")
        .ok_or_else(|| GenError::shape(index, Some(name), "missing `format`"))?
        .as_str()
        .ok_or_else(|| GenError::shape(index, Some(name), "`format` is not a string"))?;

    let description = match format {
        "enum_class" => TypeDescription::EnumClass(EnumSpec {
            name: TypeName::new(name),
            base_type: field(index, name, body, "basetype")?,
            entries: field::<Vec<EnumEntry>>(index, name, body, "enum_entries")?,
        }),
        "struct" => TypeDescription::Struct(StructSpec {
            name: TypeName::new(name),
            fields: field::<Vec<FieldSpec>>(index, name, body, "entries")?,
        }),
        other => match policy {
            FormatPolicy::Permissive => {
                tracing::warn!("skipping type {name}: unrecognized format `{other}`");
                return Ok(None);
            }
            FormatPolicy::Strict => {
                return Err(GenError::UnrecognizedFormat {
                    type_name: name.to_string(),
                    format: other.to_string(),
                });
            }
        },
    };
    Ok(Some(description))
}

fn field<T: DeserializeOwned>(
    index: usize,
    name: &str,
    body: &Map<String, Value>,
    key: &str,
) -> Result<T> {
    let value = body
        .get(key)
        .ok_or_else(|| GenError::shape(index, Some(name), format!("missing `{key}`")))?;
    T::deserialize(value).map_err(|e| GenError::shape(index, Some(name), format!("`{key}`: {e}")))
}
