//! Decode textual values into strongly-typed values by type descriptor.
//!
//! Text from config files, environment variables or form fields goes in
//! together with a descriptor such as `optional[list[int]]`; a decoded
//! `Value` (or a Rust value, through `decode_as`) comes out.
//!
//! Rules that matter when several readings are plausible:
//! - numbers never lose information (`"1.1"` is not an int, `"1.0"` is);
//! - union members are tried in declared order, a bare `str` member last;
//! - container elements are separated by an unescaped `,` (`\,` is literal),
//!   mapping entries by an unescaped `:`;
//! - sets and mappings refuse duplicates instead of dropping them.
pub mod casters;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod literal;
pub mod options;
pub mod primitive;
pub mod tokenize;
pub mod typed;
pub mod value;

pub use descriptor::{ContainerTag, Descriptor, PrimitiveKind};
pub use dispatch::{decode, decode_as, Decoder};
pub use error::{CastError, CastErrorKind, OptionsError, Result};
pub use options::DecodeOptions;
pub use tokenize::split;
pub use typed::Cast;
pub use value::{lossless_eq, Value};
