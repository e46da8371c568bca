//! Typed front end: Rust types that know their descriptor and can be
//! pulled back out of a decoded `Value`.
//!
//! ```ignore
//! let ports: Vec<u16> = shapecast::decode_as("80, 443")?;
//! let limit: Option<f64> = shapecast::decode_as("")?;
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::descriptor::Descriptor;
use crate::error::{CastError, CastErrorKind, Result};
use crate::value::Value;

pub trait Cast: Sized {
    fn descriptor() -> Descriptor;
    fn from_value(value: Value) -> Result<Self>;
}

fn mismatch<T: Cast>(value: &Value) -> CastError {
    CastError::new(
        serde_json::Value::from(value).to_string(),
        &T::descriptor(),
        CastErrorKind::ShapeMismatch { found: value.kind_name() },
    )
}

// ------------------------------- Scalars ---------------------------------- //

impl Cast for bool {
    fn descriptor() -> Descriptor { Descriptor::bool() }
    fn from_value(value: Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch::<Self>(&value))
    }
}

impl Cast for f64 {
    fn descriptor() -> Descriptor { Descriptor::float() }
    fn from_value(value: Value) -> Result<Self> {
        value.as_float().ok_or_else(|| mismatch::<Self>(&value))
    }
}

impl Cast for String {
    fn descriptor() -> Descriptor { Descriptor::string() }
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

macro_rules! impl_cast_int {
    ($($ty:ty),+) => {$(
        impl Cast for $ty {
            fn descriptor() -> Descriptor { Descriptor::int() }
            fn from_value(value: Value) -> Result<Self> {
                let i = value.as_int().ok_or_else(|| mismatch::<Self>(&value))?;
                <$ty>::try_from(i).map_err(|_| {
                    CastError::new(i.to_string(), &Self::descriptor(), CastErrorKind::Lossy)
                })
            }
        }
    )+};
}

impl_cast_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

// ------------------------------ Containers -------------------------------- //

impl<T: Cast> Cast for Option<T> {
    fn descriptor() -> Descriptor { Descriptor::optional(T::descriptor()) }
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Absent => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: Cast> Cast for Vec<T> {
    fn descriptor() -> Descriptor { Descriptor::list_of(T::descriptor()) }
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(xs) => xs.into_iter().map(T::from_value).collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T: Cast + Ord> Cast for BTreeSet<T> {
    fn descriptor() -> Descriptor { Descriptor::set_of(T::descriptor()) }
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Set(xs) => xs.into_iter().map(T::from_value).collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<K: Cast + Ord, V: Cast> Cast for BTreeMap<K, V> {
    fn descriptor() -> Descriptor { Descriptor::mapping_of(K::descriptor(), V::descriptor()) }
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Map(m) => m
                .into_iter()
                .map(|(k, v)| -> Result<(K, V)> { Ok((K::from_value(k)?, V::from_value(v)?)) })
                .collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

macro_rules! impl_cast_tuple {
    ($($name:ident),+) => {
        impl<$($name: Cast),+> Cast for ($($name,)+) {
            fn descriptor() -> Descriptor {
                Descriptor::tuple_of([$($name::descriptor()),+])
            }
            fn from_value(value: Value) -> Result<Self> {
                const ARITY: usize = [$(stringify!($name)),+].len();
                match value {
                    Value::Tuple(items) if items.len() == ARITY => {
                        let mut items = items.into_iter();
                        Ok(($(
                            $name::from_value(items.next().unwrap_or(Value::Absent))?,
                        )+))
                    }
                    other => Err(mismatch::<Self>(&other)),
                }
            }
        }
    };
}

impl_cast_tuple!(A);
impl_cast_tuple!(A, B);
impl_cast_tuple!(A, B, C);
impl_cast_tuple!(A, B, C, D);
impl_cast_tuple!(A, B, C, D, E);

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::decode_as;

    #[test]
    fn descriptors_follow_rust_types() {
        assert_eq!(<Vec<Option<i64>>>::descriptor().to_string(), "list[optional[int]]");
        assert_eq!(<(u16, String, f64)>::descriptor().to_string(), "tuple[int, str, float]");
        assert_eq!(<BTreeMap<String, bool>>::descriptor().to_string(), "map[str, bool]");
    }

    #[test]
    fn decodes_into_rust_values() {
        assert_eq!(decode_as::<Vec<i64>>("1, 2, 3"), Ok(vec![1, 2, 3]));
        assert_eq!(decode_as::<Option<f64>>(""), Ok(None));
        assert_eq!(decode_as::<Option<f64>>("2"), Ok(Some(2.0)));
        assert_eq!(decode_as::<(i64, String)>("5, five"), Ok((5, "five".to_string())));
        assert_eq!(decode_as::<BTreeSet<i64>>("3,1,2"), Ok([1, 2, 3].into_iter().collect()));
        assert_eq!(
            decode_as::<BTreeMap<String, i64>>("a: 1, b: 2"),
            Ok([("a".to_string(), 1), ("b".to_string(), 2)].into_iter().collect())
        );
        assert_eq!(decode_as::<bool>("FALSE"), Ok(false));
    }

    #[test]
    fn narrow_integers_reject_overflow() {
        assert_eq!(decode_as::<u16>("8080"), Ok(8080));
        assert_eq!(decode_as::<u16>("70000").unwrap_err().kind, CastErrorKind::Lossy);
        assert_eq!(decode_as::<u8>("-1").unwrap_err().kind, CastErrorKind::Lossy);
    }

    #[test]
    fn from_value_rejects_wrong_shape() {
        let err = <Vec<i64>>::from_value(Value::Int(1)).unwrap_err();
        assert_eq!(err.kind, CastErrorKind::ShapeMismatch { found: "int" });
        assert!(<(i64, i64)>::from_value(Value::Tuple(vec![Value::Int(1)])).is_err());
    }
}
