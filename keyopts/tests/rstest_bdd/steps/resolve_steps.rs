//! The step running `get_opts`.

use crate::fixtures::ResolutionContext;
use anyhow::Result;
use keyopts::{Key, get_opts};
use rstest_bdd_macros::when;
use test_helpers::{cmdline::tokenise, text::unquote};

#[when("the options are resolved for {cmdline}")]
fn resolve(resolution_context: &ResolutionContext, cmdline: String) -> Result<()> {
    let argv = tokenise(unquote(&cmdline))?;
    let envp = resolution_context.envp.take().unwrap_or_default();
    let mut store = resolution_context.store.take().unwrap_or_default();
    let mut error_key = match resolution_context.error_key.take() {
        Some(existing) => existing,
        None => Key::new("/sw/app")?,
    };

    resolution_context.before.set(store.clone());
    let result = get_opts(&mut store, &argv, &envp, &mut error_key);
    resolution_context.result.set(result);
    resolution_context.store.set(store);
    resolution_context.error_key.set(error_key);
    Ok(())
}
