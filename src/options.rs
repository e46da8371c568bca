//! Decoding configuration.
//!
//! Plain data with serde support so a host config layer can embed it
//! (every field defaults, so a partial table is enough).

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

// ------------------------------- Policy ---------------------------------- //

pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_ESCAPE: char = '\\';
pub const DEFAULT_PAIR_SEPARATOR: char = ':';
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Separates container elements.
    pub delimiter: char,
    /// Placed before a delimiter (or pair separator) to make it literal text.
    pub escape: char,
    /// Separates key from value inside a mapping entry.
    pub pair_separator: char,
    /// Deepest descriptor nesting the engine will follow.
    pub max_depth: usize,
    /// Also accept `1`/`0` as booleans.
    pub numeric_bools: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            escape: DEFAULT_ESCAPE,
            pair_separator: DEFAULT_PAIR_SEPARATOR,
            max_depth: DEFAULT_MAX_DEPTH,
            numeric_bools: false,
        }
    }
}

impl DecodeOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_pair_separator(mut self, pair_separator: char) -> Self {
        self.pair_separator = pair_separator;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_numeric_bools(mut self, numeric_bools: bool) -> Self {
        self.numeric_bools = numeric_bools;
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        let named = [
            ("delimiter", self.delimiter),
            ("escape", self.escape),
            ("pair_separator", self.pair_separator),
        ];
        for (i, (first, a)) in named.iter().enumerate() {
            for (second, b) in &named[i + 1..] {
                if a == b {
                    return Err(OptionsError::CharClash { first: *first, second: *second, ch: *a });
                }
            }
        }
        if self.max_depth == 0 {
            return Err(OptionsError::ZeroDepth);
        }
        Ok(())
    }
}
