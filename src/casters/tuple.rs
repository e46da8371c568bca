use crate::descriptor::Descriptor;
use crate::dispatch::Decoder;
use crate::error::{CastError, CastErrorKind, Result};
use crate::value::Value;

/// Fixed arity: the field count must equal the number of positional descriptors.
pub fn cast_tuple(decoder: &Decoder, text: &str, descriptor: &Descriptor, depth: usize) -> Result<Value> {
    let Descriptor::TupleOf(elems) = descriptor else {
        return Err(super::wrong_caster(text, descriptor));
    };

    let mut fields = decoder.fields(text);
    // blank text is one empty field unless the tuple is empty itself
    if fields.is_empty() && !elems.is_empty() {
        fields.push(String::new());
    }
    if fields.len() != elems.len() {
        return Err(CastError::new(
            text,
            descriptor,
            CastErrorKind::ArityMismatch { expected: elems.len(), found: fields.len() },
        ));
    }

    fields
        .iter()
        .zip(elems)
        .map(|(field, elem)| decoder.decode_at(field, elem, depth + 1))
        .collect::<Result<Vec<_>>>()
        .map(Value::Tuple)
}
