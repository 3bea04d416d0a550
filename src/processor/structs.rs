//! Plain aggregate `struct`s plus an `operator<<` helper.
//!
//! Field datatypes are copied through untouched. The generated `operator<<`
//! streams every member, so each member type needs its own `operator<<` when
//! the header is compiled; enums from the same header already have one.

use std::fmt::{self, Write};

use crate::model::{EmitContext, StructSpec};
use crate::processor::BANNER;

/// Emit every struct in registry order.
pub fn emit_all<'a>(
    ctx: &mut EmitContext,
    structs: impl IntoIterator<Item = &'a StructSpec>,
) -> fmt::Result {
    for spec in structs {
        tracing::info!("building struct for type {}", spec.name);
        let mut local = EmitContext::new();
        emit_struct(&mut local, spec)?;
        ctx.append(local);
    }
    Ok(())
}

pub fn emit_struct(ctx: &mut EmitContext, spec: &StructSpec) -> fmt::Result {
    let name = &spec.name;
    let (protos, defs) = (&mut ctx.prototypes, &mut ctx.definitions);

    writeln!(protos, "struct {name};")?;

    writeln!(defs, "{BANNER}")?;
    writeln!(defs, "struct {name} {{")?;
    for field in &spec.fields {
        writeln!(defs, "    {} {};", field.datatype, field.name)?;
    }
    writeln!(defs, "}};")?;
    writeln!(defs)?;

    writeln!(protos, "inline std::ostream& operator <<(std::ostream& os, const {name}& m);")?;
    writeln!(defs, "inline std::ostream& operator <<(std::ostream& os, const {name}& m) {{")?;
    writeln!(defs, "    os << \"struct {name} {{\";")?;
    for field in &spec.fields {
        let member = &field.name;
        writeln!(defs, "    os << ' ' << \"{member}:\" << m.{member};")?;
    }
    writeln!(defs, "    os << \" }}\";")?;
    writeln!(defs, "    return os;")?;
    writeln!(defs, "}}")?;
    writeln!(defs)?;

    Ok(())
}
