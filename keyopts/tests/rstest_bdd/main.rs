//! Behavioural tests for option resolution using `rstest-bdd`.
//!
//! Feature files live under `tests/features`. [`fixtures`] holds the shared
//! scenario state, [`steps`] the step registry and [`scenarios`] binds the
//! two together.

mod fixtures;
mod scenarios;
mod steps;
