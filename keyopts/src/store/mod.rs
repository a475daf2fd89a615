//! Minimal hierarchical key-value store used by the option engine.
//!
//! Only the surface the engine needs is provided: named keys with a string
//! value and string metadata, and an ordered [`KeySet`] with exact-name
//! lookup. Persistence lives elsewhere.

mod key;
mod keyset;
mod name;

pub use key::Key;
pub use keyset::KeySet;
pub use name::{
    ARRAY_WILDCARD, KeyName, KeyNameError, Namespace, array_index_name, parse_array_index,
};

#[cfg(test)]
mod tests;
