//! Step registry for the resolution scenarios.

mod outcome_steps;
mod resolve_steps;
mod spec_steps;
