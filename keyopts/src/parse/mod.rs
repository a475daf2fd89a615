//! Runtime input parsing: the argument vector and the environment.

mod args;
mod env;

pub use args::{OptionValue, ParsedArgs, ParsedOption};
pub use env::{EnvTable, EnvValue, split_env_value};
