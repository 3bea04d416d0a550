use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

/// A type name taken verbatim from the configuration.
///
/// Used for declared type names, enum base types and field datatypes. Nothing
/// downstream resolves or validates it; whatever the user wrote is what ends
/// up in the header, and the C++ compiler is the first thing to check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One enumerator as written in `enum_entries`: `IDENT` or `IDENT=literal`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct EnumEntry(String);

impl EnumEntry {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Text emitted inside the enum body, explicit value included.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Identifier part only, with any `=value` suffix stripped.
    pub fn identifier(&self) -> &str {
        self.0.split('=').next().unwrap_or_default().trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSpec {
    pub name: TypeName,
    pub base_type: TypeName,
    pub entries: Vec<EnumEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldSpec {
    pub datatype: TypeName,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructSpec {
    pub name: TypeName,
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescription {
    Struct(StructSpec),
    EnumClass(EnumSpec),
}

/// Configuration document as it comes out of the JSON loader.
///
/// `type_list` stays as raw values; the registry owns the per-entry shape
/// checks so it can report which entry is wrong.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigDocument {
    pub type_list: Vec<serde_json::Value>,
    pub output_header_file: PathBuf,
}

/// Classified types handed to the emitters. Both maps iterate in first-seen
/// order.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    pub enums: IndexMap<String, EnumSpec>,
    pub structs: IndexMap<String, StructSpec>,
}

/// Text accumulated by the emitters for one generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmitContext {
    pub prototypes: String,
    pub definitions: String,
}

impl EmitContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another context's buffers after ours.
    pub fn append(&mut self, other: EmitContext) {
        self.prototypes.push_str(&other.prototypes);
        self.definitions.push_str(&other.definitions);
    }
}
