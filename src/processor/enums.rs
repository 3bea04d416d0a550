//! `enum class` declarations plus `to_string` and `operator<<` helpers.

use std::fmt::{self, Write};

use crate::model::{EmitContext, EnumSpec};
use crate::processor::BANNER;

/// Emit every enum in registry order.
pub fn emit_all<'a>(
    ctx: &mut EmitContext,
    enums: impl IntoIterator<Item = &'a EnumSpec>,
) -> fmt::Result {
    for spec in enums {
        tracing::info!("building enum class for type {}", spec.name);
        let mut local = EmitContext::new();
        emit_enum(&mut local, spec)?;
        ctx.append(local);
    }
    Ok(())
}

pub fn emit_enum(ctx: &mut EmitContext, spec: &EnumSpec) -> fmt::Result {
    let name = &spec.name;
    let base = &spec.base_type;
    let (protos, defs) = (&mut ctx.prototypes, &mut ctx.definitions);

    // ── type ─────────────────────────────────────────────────────────
    writeln!(protos, "enum class {name} : {base};")?;

    writeln!(defs)?;
    writeln!(defs, "{BANNER}")?;
    writeln!(defs, "enum class {name} : {base} {{")?;
    let body = spec
        .entries
        .iter()
        .map(|e| format!("    {}", e.raw()))
        .collect::<Vec<_>>()
        .join(",\n");
    if !body.is_empty() {
        writeln!(defs, "{body}")?;
    }
    writeln!(defs, "}};")?;
    writeln!(defs)?;

    // ── to_string: every value of the base type lands somewhere ──────
    writeln!(protos, "inline std::string to_string({name} v);")?;
    writeln!(defs, "inline std::string to_string({name} v) {{")?;
    writeln!(defs, "    switch(v) {{")?;
    for entry in &spec.entries {
        let ident = entry.identifier();
        writeln!(defs, "       case {name}::{ident}:")?;
        writeln!(defs, "           return std::string(\"{ident}\");")?;
    }
    writeln!(defs, "       default:")?;
    writeln!(
        defs,
        "           return std::string(\"unknown value: \"+std::to_string(static_cast<{base}>(v)));"
    )?;
    writeln!(defs, "    }}")?;
    writeln!(defs, "}}")?;
    writeln!(defs)?;

    // ── operator<< ───────────────────────────────────────────────────
    writeln!(protos, "inline std::ostream& operator <<(std::ostream& os, const {name}& m);")?;
    writeln!(defs, "inline std::ostream& operator <<(std::ostream& os, const {name}& m) {{")?;
    writeln!(defs, "    os << to_string(m);")?;
    writeln!(defs, "    return os;")?;
    writeln!(defs, "}}")?;
    writeln!(defs)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnumEntry, TypeName};

    fn color() -> EnumSpec {
        EnumSpec {
            name: TypeName::from("Color"),
            base_type: TypeName::from("uint8_t"),
            entries: ["RED", "GREEN=5", "BLUE"].into_iter().map(EnumEntry::new).collect(),
        }
    }

    fn emitted(spec: &EnumSpec) -> EmitContext {
        let mut ctx = EmitContext::new();
        emit_enum(&mut ctx, spec).unwrap();
        ctx
    }

    #[test]
    fn test_prototypes() {
        let ctx = emitted(&color());
        assert_eq!(
            ctx.prototypes,
            "enum class Color : uint8_t;\n\
             inline std::string to_string(Color v);\n\
             inline std::ostream& operator <<(std::ostream& os, const Color& m);\n"
        );
    }

    #[test]
    fn test_body_keeps_order_and_literals() {
        let ctx = emitted(&color());
        assert!(
            ctx.definitions
                .contains("enum class Color : uint8_t {\n    RED,\n    GREEN=5,\n    BLUE\n};\n"),
            "{}",
            ctx.definitions
        );
    }

    #[test]
    fn test_to_string_is_total() {
        let defs = emitted(&color()).definitions;

        for ident in ["RED", "GREEN", "BLUE"] {
            assert!(defs.contains(&format!("case Color::{ident}:")), "missing case {ident}");
            assert!(defs.contains(&format!("return std::string(\"{ident}\");")));
        }
        assert!(!defs.contains("case Color::GREEN=5"), "value leaked into case label");

        let red = defs.find("case Color::RED:").unwrap();
        let green = defs.find("case Color::GREEN:").unwrap();
        let blue = defs.find("case Color::BLUE:").unwrap();
        let default = defs.find("default:").unwrap();
        assert!(red < green && green < blue && blue < default);

        assert!(defs.contains(
            "return std::string(\"unknown value: \"+std::to_string(static_cast<uint8_t>(v)));"
        ));
    }

    #[test]
    fn test_ostream_helper_chains() {
        let defs = emitted(&color()).definitions;
        assert!(defs.contains(
            "inline std::ostream& operator <<(std::ostream& os, const Color& m) {\n    os << to_string(m);\n    return os;\n}\n"
        ));
    }

    #[test]
    fn test_empty_enum() {
        let spec = EnumSpec {
            name: TypeName::from("Nothing"),
            base_type: TypeName::from("int32_t"),
            entries: vec![],
        };
        let defs = emitted(&spec).definitions;

        assert!(defs.contains("enum class Nothing : int32_t {\n};\n"), "{defs}");
        assert!(!defs.contains("case "));
        assert!(defs.contains("default:"));
    }

    #[test]
    fn test_spaced_assignment_identifier() {
        let spec = EnumSpec {
            name: TypeName::from("Level"),
            base_type: TypeName::from("int"),
            entries: vec![EnumEntry::new("LOW = -1")],
        };
        let defs = emitted(&spec).definitions;

        assert!(defs.contains("    LOW = -1\n"));
        assert!(defs.contains("case Level::LOW:"));
    }

    #[test]
    fn test_emit_all_in_order() {
        let second = EnumSpec {
            name: TypeName::from("Shape"),
            base_type: TypeName::from("uint16_t"),
            entries: vec![EnumEntry::new("SQUARE")],
        };
        let mut ctx = EmitContext::new();
        emit_all(&mut ctx, [&color(), &second]).unwrap();

        let color_at = ctx.prototypes.find("enum class Color").unwrap();
        let shape_at = ctx.prototypes.find("enum class Shape").unwrap();
        assert!(color_at < shape_at);
        assert!(ctx.definitions.find("Color : uint8_t {").unwrap() < ctx.definitions.find("Shape : uint16_t {").unwrap());
    }
}
