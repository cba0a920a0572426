//! Producers turning foreign data into sequences.
pub mod object;
#[cfg(feature = "regex")]
pub mod regex_match;

pub use object::*;
#[cfg(feature = "regex")]
pub use regex_match::*;
