use crate::descriptor::{Descriptor, PrimitiveKind};
use crate::dispatch::Decoder;
use crate::error::{CastError, CastErrorKind, Result};
use crate::value::Value;

/// First non-string member (declared order) that decodes *and* conforms
/// wins. A bare `str` member is only used once every other member failed.
/// Nested unions are flattened first, so a `str` inside one is deferred too.
pub fn cast_union(decoder: &Decoder, text: &str, descriptor: &Descriptor, depth: usize) -> Result<Value> {
    let Descriptor::UnionOf(members) = descriptor else {
        return Err(super::wrong_caster(text, descriptor));
    };

    let mut flat = Vec::with_capacity(members.len());
    let has_string = flatten_members(members, &mut flat);
    for member in flat {
        match decoder.decode_at(text, member, depth + 1) {
            Ok(value) if value.conforms_to(member) => return Ok(value),
            Ok(value) => {
                tracing::trace!(%member, found = value.kind_name(), "union: member shape mismatch");
            }
            Err(err) if matches!(err.kind, CastErrorKind::DepthExceeded { .. }) => return Err(err),
            Err(err) => {
                tracing::trace!(%member, error = %err, "union: member rejected");
            }
        }
    }

    if has_string {
        return Ok(Value::Str(text.to_string()));
    }
    Err(CastError::new(text, descriptor, CastErrorKind::NoUnionMember))
}

// Non-string members in declared order, nested unions spliced in place.
// Returns whether a bare `str` was seen at any level.
fn flatten_members<'a>(members: &'a [Descriptor], out: &mut Vec<&'a Descriptor>) -> bool {
    let mut has_string = false;
    for member in members {
        match member {
            Descriptor::Primitive(PrimitiveKind::String) => has_string = true,
            Descriptor::UnionOf(inner) => has_string |= flatten_members(inner, out),
            other => out.push(other),
        }
    }
    has_string
}

/// Blank text is the absent marker; anything else must decode as the inner type.
pub fn cast_optional(decoder: &Decoder, text: &str, descriptor: &Descriptor, depth: usize) -> Result<Value> {
    let Descriptor::OptionalOf(inner) = descriptor else {
        return Err(super::wrong_caster(text, descriptor));
    };
    if text.trim().is_empty() {
        return Ok(Value::Absent);
    }
    decoder.decode_at(text, inner, depth + 1)
}
