use crate::descriptor::Descriptor;
use crate::dispatch::Decoder;
use crate::error::{CastError, CastErrorKind, Result};
use crate::value::Value;

/// Exact match against the allowed strings; no trimming or case folding.
pub fn cast_literal(_decoder: &Decoder, text: &str, descriptor: &Descriptor, _depth: usize) -> Result<Value> {
    let Descriptor::LiteralOf(allowed) = descriptor else {
        return Err(super::wrong_caster(text, descriptor));
    };
    if allowed.contains(text) {
        Ok(Value::Str(text.to_string()))
    } else {
        Err(CastError::new(text, descriptor, CastErrorKind::NotALiteral))
    }
}
