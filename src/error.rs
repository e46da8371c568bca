use thiserror::Error;

use crate::descriptor::Descriptor;

/// Why a text could not be converted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CastErrorKind {
    #[error("text is not a literal of the requested kind")]
    Unparseable,

    #[error("conversion would lose information")]
    Lossy,

    #[error("no union member matched")]
    NoUnionMember,

    #[error("not one of the allowed literals")]
    NotALiteral,

    #[error("arity mismatch (expected {expected}, found {found})")]
    ArityMismatch { expected: usize, found: usize },

    #[error("duplicate elements, data would be lost")]
    DuplicateElement,

    #[error("entry needs exactly one key/value separator (found {separators})")]
    MalformedEntry { separators: usize },

    #[error("duplicate key")]
    DuplicateKey,

    #[error("descriptor nesting exceeds depth limit {limit}")]
    DepthExceeded { limit: usize },

    #[error("value of kind {found} does not have the requested shape")]
    ShapeMismatch { found: &'static str },

    #[error("no caster registered for this descriptor")]
    NoCaster,
}

/// The single "not convertible" error: offending text, target, reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to convert {text:?} to {target}: {kind}")]
pub struct CastError {
    pub text: String,
    pub target: Descriptor,
    pub kind: CastErrorKind,
}

impl CastError {
    pub fn new(text: impl Into<String>, target: &Descriptor, kind: CastErrorKind) -> Self {
        Self { text: text.into(), target: target.clone(), kind }
    }
}

pub type Result<T> = std::result::Result<T, CastError>;

/// Rejected `DecodeOptions`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("`{first}` and `{second}` must be different characters (both are {ch:?})")]
    CharClash { first: &'static str, second: &'static str, ch: char },

    #[error("max_depth must be at least 1")]
    ZeroDepth,
}
