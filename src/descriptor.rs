//! Type descriptors: the closed set of shapes a text value can be decoded into.
//!
//! A descriptor is plain data. The only behavior here is structural
//! inspection (`is_primitive`, `container_tag`, `args`) and a compact
//! rendering used by error messages.

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrimitiveKind {
    String,
    Integer,
    Float,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Descriptor {
    Primitive(PrimitiveKind),
    /// Most specific literal shape of the text (bare `list`/`tuple`/`set` elements).
    Inferred,
    UnionOf(Vec<Descriptor>),      // order encodes priority
    OptionalOf(Box<Descriptor>),   // union of inner and the absent marker
    CollectionOf(Box<Descriptor>),
    SequenceOf(Box<Descriptor>),
    SetOf(Box<Descriptor>),        // duplicates after casting are an error
    TupleOf(Vec<Descriptor>),      // exact arity
    MappingOf { key: Box<Descriptor>, value: Box<Descriptor> },
    LiteralOf(BTreeSet<String>),
}

/// Tag of a non-primitive descriptor; keys the caster table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContainerTag {
    Union,
    Optional,
    Collection,
    Sequence,
    Set,
    Tuple,
    Mapping,
    Literal,
}

impl ContainerTag {
    pub const ALL: [ContainerTag; 8] = [
        ContainerTag::Union,
        ContainerTag::Optional,
        ContainerTag::Collection,
        ContainerTag::Sequence,
        ContainerTag::Set,
        ContainerTag::Tuple,
        ContainerTag::Mapping,
        ContainerTag::Literal,
    ];
}

// ------------------------------ Constructors ------------------------------ //

impl Descriptor {
    pub fn string() -> Self { Descriptor::Primitive(PrimitiveKind::String) }
    pub fn int() -> Self { Descriptor::Primitive(PrimitiveKind::Integer) }
    pub fn float() -> Self { Descriptor::Primitive(PrimitiveKind::Float) }
    pub fn bool() -> Self { Descriptor::Primitive(PrimitiveKind::Boolean) }

    pub fn union_of(members: impl IntoIterator<Item = Descriptor>) -> Self {
        Descriptor::UnionOf(members.into_iter().collect())
    }
    pub fn optional(inner: Descriptor) -> Self { Descriptor::OptionalOf(Box::new(inner)) }
    pub fn collection_of(element: Descriptor) -> Self { Descriptor::CollectionOf(Box::new(element)) }
    pub fn list_of(element: Descriptor) -> Self { Descriptor::SequenceOf(Box::new(element)) }
    pub fn set_of(element: Descriptor) -> Self { Descriptor::SetOf(Box::new(element)) }
    pub fn tuple_of(elems: impl IntoIterator<Item = Descriptor>) -> Self {
        Descriptor::TupleOf(elems.into_iter().collect())
    }
    pub fn mapping_of(key: Descriptor, value: Descriptor) -> Self {
        Descriptor::MappingOf { key: Box::new(key), value: Box::new(value) }
    }
    pub fn literal_of<S: Into<String>>(allowed: impl IntoIterator<Item = S>) -> Self {
        Descriptor::LiteralOf(allowed.into_iter().map(Into::into).collect())
    }
}

// ------------------------------ Inspection -------------------------------- //

impl Descriptor {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Descriptor::Primitive(_))
    }

    pub fn is_container(&self) -> bool {
        self.container_tag().is_some()
    }

    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Descriptor::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn container_tag(&self) -> Option<ContainerTag> {
        match self {
            Descriptor::Primitive(_) | Descriptor::Inferred => None,
            Descriptor::UnionOf(_) => Some(ContainerTag::Union),
            Descriptor::OptionalOf(_) => Some(ContainerTag::Optional),
            Descriptor::CollectionOf(_) => Some(ContainerTag::Collection),
            Descriptor::SequenceOf(_) => Some(ContainerTag::Sequence),
            Descriptor::SetOf(_) => Some(ContainerTag::Set),
            Descriptor::TupleOf(_) => Some(ContainerTag::Tuple),
            Descriptor::MappingOf { .. } => Some(ContainerTag::Mapping),
            Descriptor::LiteralOf(_) => Some(ContainerTag::Literal),
        }
    }

    /// Nested argument descriptors, in declaration order.
    pub fn args(&self) -> Vec<&Descriptor> {
        match self {
            Descriptor::Primitive(_) | Descriptor::Inferred | Descriptor::LiteralOf(_) => Vec::new(),
            Descriptor::UnionOf(xs) | Descriptor::TupleOf(xs) => xs.iter().collect(),
            Descriptor::OptionalOf(x)
            | Descriptor::CollectionOf(x)
            | Descriptor::SequenceOf(x)
            | Descriptor::SetOf(x) => vec![x.as_ref()],
            Descriptor::MappingOf { key, value } => vec![key.as_ref(), value.as_ref()],
        }
    }

    /// Longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        1 + self.args().into_iter().map(Descriptor::depth).max().unwrap_or(0)
    }
}

// -------------------------------- Display --------------------------------- //

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrimitiveKind::String => "str",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Boolean => "bool",
        })
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, name: &str, xs: &[&Descriptor]) -> fmt::Result {
            write!(f, "{name}[")?;
            for (i, x) in xs.iter().enumerate() {
                if i > 0 { f.write_str(", ")?; }
                write!(f, "{x}")?;
            }
            f.write_str("]")
        }

        match self {
            Descriptor::Primitive(kind) => write!(f, "{kind}"),
            Descriptor::Inferred => f.write_str("any"),
            Descriptor::UnionOf(_) => list(f, "union", &self.args()),
            Descriptor::OptionalOf(_) => list(f, "optional", &self.args()),
            Descriptor::CollectionOf(_) => list(f, "collection", &self.args()),
            Descriptor::SequenceOf(_) => list(f, "list", &self.args()),
            Descriptor::SetOf(_) => list(f, "set", &self.args()),
            Descriptor::TupleOf(_) => list(f, "tuple", &self.args()),
            Descriptor::MappingOf { .. } => list(f, "map", &self.args()),
            Descriptor::LiteralOf(allowed) => {
                f.write_str("literal[")?;
                for (i, lit) in allowed.iter().enumerate() {
                    if i > 0 { f.write_str(", ")?; }
                    write!(f, "{lit:?}")?;
                }
                f.write_str("]")
            }
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
