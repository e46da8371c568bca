//! Generic dispatch engine.
//!
//! Routes a descriptor to the primitive caster or to the container caster
//! registered for its tag, recursing once per nested element. Stateless:
//! a `Decoder` only carries its options and can be shared freely.

use once_cell::sync::Lazy;

use crate::casters;
use crate::descriptor::{Descriptor, PrimitiveKind};
use crate::error::{CastError, CastErrorKind, OptionsError, Result};
use crate::options::DecodeOptions;
use crate::primitive;
use crate::tokenize;
use crate::typed::Cast;
use crate::value::Value;

static DEFAULT_DECODER: Lazy<Decoder> = Lazy::new(Decoder::default);

/// Decode `text` with the default options.
pub fn decode(text: &str, descriptor: &Descriptor) -> Result<Value> {
    DEFAULT_DECODER.decode(text, descriptor)
}

/// Decode `text` straight into a Rust type.
pub fn decode_as<T: Cast>(text: &str) -> Result<T> {
    DEFAULT_DECODER.decode_as(text)
}

#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> std::result::Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Descriptors nested deeper than `max_depth` are refused up front, even
    /// when the text would never reach the deep branch.
    pub fn decode(&self, text: &str, descriptor: &Descriptor) -> Result<Value> {
        if descriptor.depth() > self.options.max_depth {
            return Err(self.too_deep(text, descriptor));
        }
        self.decode_at(text, descriptor, 0)
    }

    pub fn decode_as<T: Cast>(&self, text: &str) -> Result<T> {
        T::from_value(self.decode(text, &T::descriptor())?)
    }

    /// Identity short-circuit: a value already shaped like `descriptor` comes
    /// back untouched, anything else is rejected. Strings are always decoded,
    /// so `union[float, str]` turns `"2"` into `2.0` here as it does in `decode`.
    pub fn recast(&self, value: Value, descriptor: &Descriptor) -> Result<Value> {
        match value {
            Value::Str(text) => self.decode(&text, descriptor),
            other if other.conforms_to(descriptor) => Ok(other),
            other => Err(CastError::new(
                serde_json::Value::from(&other).to_string(),
                descriptor,
                CastErrorKind::ShapeMismatch { found: other.kind_name() },
            )),
        }
    }

    pub(crate) fn decode_at(&self, text: &str, descriptor: &Descriptor, depth: usize) -> Result<Value> {
        tracing::trace!(%descriptor, depth, "decode: entering");
        if depth >= self.options.max_depth {
            return Err(self.too_deep(text, descriptor));
        }

        match descriptor {
            // a string is always representable by itself
            Descriptor::Primitive(PrimitiveKind::String) => Ok(Value::Str(text.to_string())),
            Descriptor::Primitive(kind) => primitive::cast_primitive(text, *kind, &self.options),
            Descriptor::Inferred => Ok(primitive::cast_inferred(text)),
            _ => {
                let caster = descriptor
                    .container_tag()
                    .and_then(casters::lookup)
                    .ok_or_else(|| CastError::new(text, descriptor, CastErrorKind::NoCaster))?;
                caster(self, text, descriptor, depth)
            }
        }
    }

    fn too_deep(&self, text: &str, descriptor: &Descriptor) -> CastError {
        CastError::new(text, descriptor, CastErrorKind::DepthExceeded { limit: self.options.max_depth })
    }

    /// Element fields of a container text. Blank text holds no elements.
    pub(crate) fn fields(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        tokenize::split(text, self.options.delimiter, self.options.escape)
    }

    pub(crate) fn split_pair(&self, entry: &str) -> std::result::Result<(String, String), usize> {
        tokenize::split_pair(entry, self.options.pair_separator, self.options.escape)
    }
}

// ------------------------------- Tests ------------------------------------ //
