//! Decoded values and the two comparisons the engine relies on:
//! runtime-shape conformance (`conforms_to`) and lossless equality.

use std::collections::{BTreeMap, BTreeSet};

use ordered_float::OrderedFloat;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::descriptor::{Descriptor, PrimitiveKind};

/// Result of a cast. Totally ordered and hashable so that values can be set
/// members and mapping keys; floats go through `OrderedFloat` for that.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Absent,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(BTreeSet<Value>),
    Map(BTreeMap<Value, Value>),
}

impl Value {
    pub fn float(f: f64) -> Self { Value::Float(OrderedFloat(f)) }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
        }
    }

    pub fn is_absent(&self) -> bool { matches!(self, Value::Absent) }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self { Value::Bool(b) => Some(*b), _ => None }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self { Value::Int(i) => Some(*i), _ => None }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self { Value::Float(f) => Some(f.0), _ => None }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self { Value::Str(s) => Some(s), _ => None }
    }

    /// Elements of any multi-element value, in iteration order.
    pub fn elements(&self) -> Option<Vec<&Value>> {
        match self {
            Value::List(xs) | Value::Tuple(xs) => Some(xs.iter().collect()),
            Value::Set(xs) => Some(xs.iter().collect()),
            _ => None,
        }
    }
}

// ------------------------------ Conformance ------------------------------- //

impl Value {
    /// True if this value has exactly the runtime shape `descriptor` produces.
    pub fn conforms_to(&self, descriptor: &Descriptor) -> bool {
        match (descriptor, self) {
            (Descriptor::Primitive(kind), v) => matches!(
                (kind, v),
                (PrimitiveKind::String, Value::Str(_))
                    | (PrimitiveKind::Integer, Value::Int(_))
                    | (PrimitiveKind::Float, Value::Float(_))
                    | (PrimitiveKind::Boolean, Value::Bool(_))
            ),
            (Descriptor::Inferred, v) => v.is_scalar(),
            (Descriptor::UnionOf(members), v) => members.iter().any(|m| v.conforms_to(m)),
            (Descriptor::OptionalOf(_), Value::Absent) => true,
            (Descriptor::OptionalOf(inner), v) => v.conforms_to(inner),
            (Descriptor::CollectionOf(el) | Descriptor::SequenceOf(el), Value::List(xs)) => {
                xs.iter().all(|x| x.conforms_to(el))
            }
            (Descriptor::SetOf(el), Value::Set(xs)) => xs.iter().all(|x| x.conforms_to(el)),
            (Descriptor::TupleOf(elems), Value::Tuple(xs)) => {
                elems.len() == xs.len() && xs.iter().zip(elems).all(|(x, d)| x.conforms_to(d))
            }
            (Descriptor::MappingOf { key, value }, Value::Map(m)) => {
                m.iter().all(|(k, v)| k.conforms_to(key) && v.conforms_to(value))
            }
            (Descriptor::LiteralOf(allowed), Value::Str(s)) => allowed.contains(s),
            _ => false,
        }
    }
}

// ---------------------------- Lossless equality --------------------------- //

/// Two values are lossless-equal when converting each into the other's
/// representation yields equal values. Sets compare by membership, other
/// element containers compare position by position.
pub fn lossless_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => int_float_eq(*i, f.0),
        (Value::Bool(x), Value::Int(i)) | (Value::Int(i), Value::Bool(x)) => *i == i64::from(*x),
        (Value::Bool(x), Value::Float(f)) | (Value::Float(f), Value::Bool(x)) => {
            f.0 == if *x { 1.0 } else { 0.0 }
        }
        (Value::Set(_), _) | (_, Value::Set(_)) => match (a.elements(), b.elements()) {
            (Some(xs), Some(ys)) => {
                xs.iter().all(|x| ys.iter().any(|y| lossless_eq(x, y)))
                    && ys.iter().all(|y| xs.iter().any(|x| lossless_eq(x, y)))
            }
            _ => false,
        },
        (Value::List(xs) | Value::Tuple(xs), Value::List(ys) | Value::Tuple(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| lossless_eq(x, y))
        }
        _ => a == b,
    }
}

// i64 -> f64 is only exact up to 2^53; check both directions.
fn int_float_eq(i: i64, f: f64) -> bool {
    if !f.is_finite() || f.fract() != 0.0 {
        return false;
    }
    if f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return false;
    }
    (f as i64) == i && (i as f64) == f
}

// -------------------------------- Interop --------------------------------- //

impl From<bool> for Value { fn from(b: bool) -> Self { Value::Bool(b) } }
impl From<i64> for Value { fn from(i: i64) -> Self { Value::Int(i) } }
impl From<f64> for Value { fn from(f: f64) -> Self { Value::float(f) } }
impl From<&str> for Value { fn from(s: &str) -> Self { Value::Str(s.to_string()) } }
impl From<String> for Value { fn from(s: String) -> Self { Value::Str(s) } }

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(f.0),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(xs) | Value::Tuple(xs) => {
                let mut seq = serializer.serialize_seq(Some(xs.len()))?;
                for x in xs { seq.serialize_element(x)?; }
                seq.end()
            }
            Value::Set(xs) => {
                let mut seq = serializer.serialize_seq(Some(xs.len()))?;
                for x in xs { seq.serialize_element(x)?; }
                seq.end()
            }
            // JSON-like targets only take string keys; anything else goes out as pairs.
            Value::Map(m) if m.keys().all(|k| matches!(k, Value::Str(_))) => {
                let mut map = serializer.serialize_map(Some(m.len()))?;
                for (k, v) in m { map.serialize_entry(k, v)?; }
                map.end()
            }
            Value::Map(m) => {
                let mut seq = serializer.serialize_seq(Some(m.len()))?;
                for pair in m { seq.serialize_element(&pair)?; }
                seq.end()
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        match v {
            Value::Absent => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::from(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Value::from(f.0),
            Value::Str(s) => serde_json::Value::from(s.clone()),
            Value::List(xs) | Value::Tuple(xs) => {
                serde_json::Value::Array(xs.iter().map(serde_json::Value::from).collect())
            }
            Value::Set(xs) => serde_json::Value::Array(xs.iter().map(serde_json::Value::from).collect()),
            Value::Map(m) if m.keys().all(|k| matches!(k, Value::Str(_))) => serde_json::Value::Object(
                m.iter()
                    .filter_map(|(k, v)| k.as_str().map(|k| (k.to_string(), serde_json::Value::from(v))))
                    .collect(),
            ),
            Value::Map(m) => serde_json::Value::Array(
                m.iter()
                    .map(|(k, v)| serde_json::Value::Array(vec![k.into(), v.into()]))
                    .collect(),
            ),
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_lossless_equality() {
        assert!(lossless_eq(&Value::Int(1), &Value::float(1.0)));
        assert!(!lossless_eq(&Value::Int(1), &Value::float(1.1)));
        assert!(lossless_eq(&Value::Int(0), &Value::Bool(false)));
        assert!(!lossless_eq(&Value::Int(2), &Value::Bool(true)));
        // 2^53 + 1 does not survive a trip through f64
        let big = (1i64 << 53) + 1;
        assert!(!lossless_eq(&Value::Int(big), &Value::float(big as f64)));
        assert!(!lossless_eq(&Value::Str("1".into()), &Value::Int(1)));
    }

    #[test]
    fn container_lossless_equality() {
        let list = Value::List(vec![Value::Int(1), Value::Int(2)]);
        let tuple = Value::Tuple(vec![Value::float(1.0), Value::Int(2)]);
        let set = Value::Set([Value::Int(2), Value::Int(1)].into_iter().collect());
        assert!(lossless_eq(&list, &tuple));
        assert!(lossless_eq(&list, &set));
        let dup = Value::List(vec![Value::Int(1), Value::Int(1), Value::Int(2)]);
        assert!(lossless_eq(&dup, &set));
        assert!(!lossless_eq(&Value::List(vec![Value::Int(1)]), &set));
    }

    #[test]
    fn conformance_follows_descriptor_shape() {
        let d = Descriptor::list_of(Descriptor::optional(Descriptor::int()));
        let v = Value::List(vec![Value::Int(1), Value::Absent]);
        assert!(v.conforms_to(&d));
        assert!(!Value::List(vec![Value::float(1.0)]).conforms_to(&d));

        let t = Descriptor::tuple_of([Descriptor::int(), Descriptor::string()]);
        assert!(Value::Tuple(vec![Value::Int(1), "a".into()]).conforms_to(&t));
        assert!(!Value::Tuple(vec![Value::Int(1)]).conforms_to(&t));
        assert!(!Value::List(vec![Value::Int(1), "a".into()]).conforms_to(&t));

        assert!(Value::Str("on".into()).conforms_to(&Descriptor::literal_of(["on", "off"])));
        assert!(!Value::Str("up".into()).conforms_to(&Descriptor::literal_of(["on", "off"])));
    }

    #[test]
    fn serializes_to_json() {
        let mut m = BTreeMap::new();
        m.insert(Value::from("a"), Value::Int(1));
        m.insert(Value::from("b"), Value::Absent);
        assert_eq!(serde_json::to_value(Value::Map(m.clone())).unwrap(), json!({"a": 1, "b": null}));
        assert_eq!(serde_json::Value::from(&Value::Map(m)), json!({"a": 1, "b": null}));

        let mut numeric = BTreeMap::new();
        numeric.insert(Value::Int(1), Value::float(2.5));
        assert_eq!(serde_json::to_value(Value::Map(numeric)).unwrap(), json!([[1, 2.5]]));

        let t = Value::Tuple(vec![Value::Int(5), Value::Bool(true), "x".into()]);
        assert_eq!(serde_json::Value::from(&t), json!([5, true, "x"]));
    }
}
