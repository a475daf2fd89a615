//! Test helpers shared across the keyopts workspace.
//!
//! - [`env`]: guards for tests that mutate the process environment.
//! - [`cmdline`]: turns feature-file text into `argv` and `envp` vectors.
//! - [`text`]: placeholder normalisation for behavioural steps.

pub mod cmdline;
pub mod env;
pub mod text;
