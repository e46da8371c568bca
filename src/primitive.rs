//! Primitive caster: one text into one scalar, refusing lossy conversions.

use crate::descriptor::{Descriptor, PrimitiveKind};
use crate::error::{CastError, CastErrorKind, Result};
use crate::literal::{self, Literal};
use crate::options::DecodeOptions;
use crate::value::{lossless_eq, Value};

pub fn cast_primitive(text: &str, kind: PrimitiveKind, options: &DecodeOptions) -> Result<Value> {
    let target = Descriptor::Primitive(kind);
    let fail = |reason| Err(CastError::new(text, &target, reason));

    match kind {
        PrimitiveKind::String => Ok(Value::Str(text.to_string())),
        PrimitiveKind::Boolean => {
            let t = text.trim();
            if let Some(b) = literal::parse_bool(t) {
                return Ok(Value::Bool(b));
            }
            if options.numeric_bools {
                match literal::parse_int(t) {
                    Some(0) => return Ok(Value::Bool(false)),
                    Some(1) => return Ok(Value::Bool(true)),
                    Some(_) => return fail(CastErrorKind::Lossy),
                    None => {}
                }
            }
            fail(CastErrorKind::Unparseable)
        }
        PrimitiveKind::Integer | PrimitiveKind::Float => {
            let inferred = match literal::infer(text) {
                Literal::Str(inner) => return cast_numeric_str(text, &inner, kind),
                lit if lit.is_numeric() => lit.into_value(),
                _ => return fail(CastErrorKind::Unparseable),
            };
            let Some(recast) = recast_number(&inferred, kind) else {
                return fail(CastErrorKind::Lossy);
            };
            if !lossless_eq(&inferred, &recast) {
                return fail(CastErrorKind::Lossy);
            }
            if !recast.conforms_to(&target) {
                return fail(CastErrorKind::ShapeMismatch { found: recast.kind_name() });
            }
            Ok(recast)
        }
    }
}

// Forward conversion only; the caller checks nothing was lost.
fn recast_number(value: &Value, kind: PrimitiveKind) -> Option<Value> {
    match (value, kind) {
        (Value::Int(i), PrimitiveKind::Integer) => Some(Value::Int(*i)),
        (Value::Int(i), PrimitiveKind::Float) => Some(Value::float(*i as f64)),
        (Value::Float(f), PrimitiveKind::Float) => Some(Value::Float(*f)),
        (Value::Float(f), PrimitiveKind::Integer) => {
            let f = f.0;
            let in_range = f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64;
            in_range.then(|| Value::Int(f.trunc() as i64))
        }
        _ => None,
    }
}

/// A string literal becomes a number only when the number prints back as the
/// exact same text: `'5'` is 5, `'1.50'` would drop a digit.
fn cast_numeric_str(text: &str, inner: &str, kind: PrimitiveKind) -> Result<Value> {
    let target = Descriptor::Primitive(kind);
    let fail = |reason| Err(CastError::new(text, &target, reason));

    if literal::float_out_of_range(inner) {
        return fail(CastErrorKind::Lossy);
    }
    let parsed = match kind {
        PrimitiveKind::Integer => literal::parse_int(inner).map(|i| (Value::Int(i), i.to_string())),
        _ => literal::parse_float(inner).map(|f| (Value::float(f), f.to_string())),
    };
    match parsed {
        Some((value, printed)) if printed == inner => Ok(value),
        Some(_) => fail(CastErrorKind::Lossy),
        None => fail(CastErrorKind::Unparseable),
    }
}

/// Shape the literal ladder infers for `text`, as a value.
pub fn cast_inferred(text: &str) -> Value {
    literal::infer(text).into_value()
}
