//! The functional core: classify the type list, then render each type into
//! the prototype and definition buffers.
pub mod enums;
pub mod registry;
pub mod structs;

pub use registry::FormatPolicy;

use crate::error::Result;
use crate::model::{ConfigDocument, EmitContext, TypeRegistry};

/// Separator line placed above every generated type definition.
pub(crate) const BANNER: &str = "////////////////////////////////////////////////////////";

/// Runs every emission pass and returns the filled buffers for the writer.
///
/// Enums go first so struct members can use them by value.
pub fn run(doc: &ConfigDocument, policy: FormatPolicy) -> Result<EmitContext> {
    let registry = TypeRegistry::classify(&doc.type_list, policy)?;
    if registry.is_empty() {
        tracing::warn!("no struct or enum_class types found, header will only hold boilerplate");
    }
    emit(&registry)
}

pub fn emit(registry: &TypeRegistry) -> Result<EmitContext> {
    let mut ctx = EmitContext::new();
    enums::emit_all(&mut ctx, registry.enums.values())?;
    structs::emit_all(&mut ctx, registry.structs.values())?;
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(types: serde_json::Value) -> ConfigDocument {
        serde_json::from_value(json!({ "type_list": types, "output_header_file": "types.h" }))
            .expect("config")
    }

    #[test]
    fn test_enums_precede_structs() {
        let doc = doc(json!([
            { "Point": { "format": "struct", "entries": [ { "datatype": "Color", "name": "c" } ] } },
            { "Color": { "format": "enum_class", "basetype": "uint8_t", "enum_entries": ["RED"] } },
        ]));
        let ctx = run(&doc, FormatPolicy::Permissive).expect("run");

        assert!(ctx.prototypes.find("enum class Color").unwrap() < ctx.prototypes.find("struct Point;").unwrap());
        assert!(ctx.definitions.find("enum class Color :").unwrap() < ctx.definitions.find("struct Point {").unwrap());
    }

    #[test]
    fn test_unknown_format_leaves_no_trace() {
        let doc = doc(json!([
            { "Blob": { "format": "union" } },
        ]));
        let ctx = run(&doc, FormatPolicy::Permissive).expect("run");

        assert!(!ctx.prototypes.contains("Blob"));
        assert!(!ctx.definitions.contains("Blob"));
        assert_eq!(ctx, EmitContext::new());
    }

    #[test]
    fn test_render_failure_becomes_gen_error() {
        let err: crate::error::GenError = std::fmt::Error.into();
        assert!(matches!(err, crate::error::GenError::Render(_)));
        assert!(err.to_string().starts_with("failed to render"), "got: {err}");
    }

    #[test]
    fn test_emission_is_deterministic() {
        let doc = doc(json!([
            { "Color": { "format": "enum_class", "basetype": "uint8_t", "enum_entries": ["RED", "GREEN=5"] } },
            { "Point": { "format": "struct", "entries": [ { "datatype": "double", "name": "x" } ] } },
        ]));
        let a = run(&doc, FormatPolicy::Permissive).expect("run");
        let b = run(&doc, FormatPolicy::Permissive).expect("run");
        assert_eq!(a, b);
    }
}
