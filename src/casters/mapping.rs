use std::collections::BTreeMap;

use crate::descriptor::Descriptor;
use crate::dispatch::Decoder;
use crate::error::{CastError, CastErrorKind, Result};
use crate::value::Value;

/// Entries separated by the delimiter, key and value by exactly one
/// unescaped pair separator. Keys must decode to distinct values.
pub fn cast_mapping(decoder: &Decoder, text: &str, descriptor: &Descriptor, depth: usize) -> Result<Value> {
    let Descriptor::MappingOf { key, value } = descriptor else {
        return Err(super::wrong_caster(text, descriptor));
    };

    let mut out = BTreeMap::new();
    for entry in decoder.fields(text) {
        let (raw_key, raw_value) = decoder.split_pair(&entry).map_err(|separators| {
            CastError::new(entry.as_str(), descriptor, CastErrorKind::MalformedEntry { separators })
        })?;
        let k = decoder.decode_at(&raw_key, key, depth + 1)?;
        let v = decoder.decode_at(&raw_value, value, depth + 1)?;
        if out.insert(k, v).is_some() {
            return Err(CastError::new(entry.as_str(), descriptor, CastErrorKind::DuplicateKey));
        }
    }
    Ok(Value::Map(out))
}
