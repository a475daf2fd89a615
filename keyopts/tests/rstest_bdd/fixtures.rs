//! Shared fixtures for the behavioural scenarios.

use keyopts::{Key, KeySet, OptsError, Outcome};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State threaded through the steps of one resolution scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct ResolutionContext {
    /// Store holding the specification, later the resolved keys.
    pub store: Slot<KeySet>,
    /// `NAME=value` entries passed as the environment.
    pub envp: Slot<Vec<String>>,
    /// Error key handed to `get_opts`, carrying posix mode and help texts.
    pub error_key: Slot<Key>,
    /// Store contents before resolution ran.
    pub before: Slot<KeySet>,
    /// Result of the last resolution.
    pub result: Slot<Result<Outcome, OptsError>>,
}

/// Fresh state per scenario.
#[fixture]
pub fn resolution_context() -> ResolutionContext {
    ResolutionContext::default()
}
