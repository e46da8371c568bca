use std::collections::BTreeSet;

use crate::descriptor::Descriptor;
use crate::dispatch::Decoder;
use crate::error::{CastError, CastErrorKind, Result};
use crate::value::Value;

/// `CollectionOf` and `SequenceOf`: decode every field, keep field order.
pub fn cast_list(decoder: &Decoder, text: &str, descriptor: &Descriptor, depth: usize) -> Result<Value> {
    let (Descriptor::CollectionOf(element) | Descriptor::SequenceOf(element)) = descriptor else {
        return Err(super::wrong_caster(text, descriptor));
    };
    decode_elements(decoder, text, element, depth).map(Value::List)
}

/// Like a collection, but two equal decoded elements are an error rather
/// than a silent dedup.
pub fn cast_set(decoder: &Decoder, text: &str, descriptor: &Descriptor, depth: usize) -> Result<Value> {
    let Descriptor::SetOf(element) = descriptor else {
        return Err(super::wrong_caster(text, descriptor));
    };
    let mut out = BTreeSet::new();
    for value in decode_elements(decoder, text, element, depth)? {
        if !out.insert(value) {
            return Err(CastError::new(text, descriptor, CastErrorKind::DuplicateElement));
        }
    }
    Ok(Value::Set(out))
}

fn decode_elements(decoder: &Decoder, text: &str, element: &Descriptor, depth: usize) -> Result<Vec<Value>> {
    let fields = decoder.fields(text);
    if fields.len() == 1 {
        tracing::debug!(%element, "collection: bare scalar becomes a one-element container");
    }
    fields
        .iter()
        .map(|field| decoder.decode_at(field, element, depth + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::decode;

    fn ints(xs: &[i64]) -> Value {
        Value::List(xs.iter().copied().map(Value::Int).collect())
    }

    #[test]
    fn decodes_each_field() {
        assert_eq!(decode("1,2,3,4", &Descriptor::collection_of(Descriptor::int())), Ok(ints(&[1, 2, 3, 4])));
        assert_eq!(
            decode("1, 1.0, 1.4, 1.2", &Descriptor::collection_of(Descriptor::float())),
            Ok(Value::List(vec![Value::float(1.0), Value::float(1.0), Value::float(1.4), Value::float(1.2)]))
        );
        assert_eq!(
            decode("a, f, 6, d, 2398.9", &Descriptor::collection_of(Descriptor::string())),
            Ok(Value::List(["a", "f", "6", "d", "2398.9"].into_iter().map(Value::from).collect()))
        );
    }

    #[test]
    fn bare_scalar_wraps() {
        assert_eq!(decode("9", &Descriptor::collection_of(Descriptor::int())), Ok(ints(&[9])));
        assert_eq!(decode("9", &Descriptor::list_of(Descriptor::int())), Ok(ints(&[9])));
    }

    #[test]
    fn union_elements_keep_priority() {
        let text = "1, 1.1, abc, a1.125f3, 2.42334f";
        let all = Descriptor::collection_of(Descriptor::union_of([
            Descriptor::int(),
            Descriptor::float(),
            Descriptor::string(),
        ]));
        assert_eq!(
            decode(text, &all),
            Ok(Value::List(vec![
                Value::Int(1),
                Value::float(1.1),
                Value::from("abc"),
                Value::from("a1.125f3"),
                Value::from("2.42334f"),
            ]))
        );

        let numeric = Descriptor::collection_of(Descriptor::union_of([Descriptor::int(), Descriptor::float()]));
        assert_eq!(decode(text, &numeric).unwrap_err().kind, CastErrorKind::NoUnionMember);

        let int_or_str = Descriptor::collection_of(Descriptor::union_of([Descriptor::int(), Descriptor::string()]));
        assert_eq!(
            decode(text, &int_or_str),
            Ok(Value::List(vec![
                Value::Int(1),
                Value::from("1.1"),
                Value::from("abc"),
                Value::from("a1.125f3"),
                Value::from("2.42334f"),
            ]))
        );
    }

    #[test]
    fn escaped_commas_stay_in_one_element() {
        let d = Descriptor::list_of(Descriptor::Inferred);
        assert_eq!(
            decode(r"'abc', 'def', 'ghi\,jkl', 'mnop'", &d),
            Ok(Value::List(["abc", "def", "ghi,jkl", "mnop"].into_iter().map(Value::from).collect()))
        );
        // unescaped, the comma splits the quoted text into two unquoted halves
        assert_eq!(decode("'abc', 'def', 'ghi,jkl', 'mnop'", &d).unwrap(), Value::List(vec![
            Value::from("abc"),
            Value::from("def"),
            Value::from("'ghi"),
            Value::from("jkl'"),
            Value::from("mnop"),
        ]));
        let strings = Descriptor::list_of(Descriptor::string());
        assert_eq!(
            decode(r"abc, def, ghi\,jkl", &strings),
            Ok(Value::List(["abc", "def", "ghi,jkl"].into_iter().map(Value::from).collect()))
        );
    }

    #[test]
    fn inferred_elements() {
        let d = Descriptor::list_of(Descriptor::Inferred);
        assert_eq!(decode("'a','b'", &d), Ok(Value::List(vec![Value::from("a"), Value::from("b")])));
        assert_eq!(
            decode("1, 'a', 2.5, true", &d),
            Ok(Value::List(vec![Value::Int(1), Value::from("a"), Value::float(2.5), Value::Bool(true)]))
        );
    }

    #[test]
    fn empty_and_trailing_fields() {
        let d = Descriptor::list_of(Descriptor::int());
        assert_eq!(decode("", &d), Ok(ints(&[])));
        assert_eq!(decode("   ", &d), Ok(ints(&[])));
        assert!(decode("1,2,", &d).is_err());
        assert!(decode("1,,2", &d).is_err());
        assert_eq!(
            decode("1,2,", &Descriptor::list_of(Descriptor::optional(Descriptor::int()))),
            Ok(Value::List(vec![Value::Int(1), Value::Int(2), Value::Absent]))
        );
    }

    #[test]
    fn sets_reject_duplicates() {
        let d = Descriptor::set_of(Descriptor::int());
        assert_eq!(
            decode("2,3,4,5", &d),
            Ok(Value::Set([2, 3, 4, 5].into_iter().map(Value::Int).collect()))
        );
        assert_eq!(decode("4", &d), Ok(Value::Set([Value::Int(4)].into_iter().collect())));
        let err = decode("4,4,5", &d).unwrap_err();
        assert_eq!(err.kind, CastErrorKind::DuplicateElement);
        assert_eq!(decode("4, 4, 5", &d).unwrap_err().kind, CastErrorKind::DuplicateElement);
        // 1 and 1.0 are the same float
        assert!(decode("1, 1.0", &Descriptor::set_of(Descriptor::float())).is_err());
    }

    #[test]
    fn mixed_inferred_set() {
        let d = Descriptor::set_of(Descriptor::Inferred);
        assert_eq!(
            decode("4, '5'", &d),
            Ok(Value::Set([Value::Int(4), Value::from("5")].into_iter().collect()))
        );
    }
}
