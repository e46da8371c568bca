//! Container casters and the read-only tag → caster table.
//!
//! Every multi-element caster gets its fields from `Decoder::fields` and
//! recurses through `Decoder::decode_at` one level deeper. Only the union
//! caster catches nested errors.
pub mod union;
pub mod collection;
pub mod tuple;
pub mod mapping;
pub mod literal;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::descriptor::{ContainerTag, Descriptor};
use crate::dispatch::Decoder;
use crate::error::{CastError, CastErrorKind, Result};
use crate::value::Value;

pub type Caster = fn(&Decoder, &str, &Descriptor, usize) -> Result<Value>;

static CAST_MAP: Lazy<BTreeMap<ContainerTag, Caster>> = Lazy::new(configure_cast_map);

fn configure_cast_map() -> BTreeMap<ContainerTag, Caster> {
    ContainerTag::ALL.into_iter().map(|tag| (tag, caster_for(tag))).collect()
}

fn caster_for(tag: ContainerTag) -> Caster {
    match tag {
        ContainerTag::Union => union::cast_union,
        ContainerTag::Optional => union::cast_optional,
        ContainerTag::Collection | ContainerTag::Sequence => collection::cast_list,
        ContainerTag::Set => collection::cast_set,
        ContainerTag::Tuple => tuple::cast_tuple,
        ContainerTag::Mapping => mapping::cast_mapping,
        ContainerTag::Literal => literal::cast_literal,
    }
}

pub fn lookup(tag: ContainerTag) -> Option<Caster> {
    CAST_MAP.get(&tag).copied()
}

// A caster handed a descriptor of another tag; only reachable through a bad table.
fn wrong_caster(text: &str, descriptor: &Descriptor) -> CastError {
    CastError::new(text, descriptor, CastErrorKind::NoCaster)
}
