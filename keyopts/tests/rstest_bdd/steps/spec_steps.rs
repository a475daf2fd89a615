//! Steps that build the specification, environment and error key.

use crate::fixtures::ResolutionContext;
use anyhow::Result;
use keyopts::{Key, KeyName, POSIXLY_META};
use rstest_bdd_macros::given;
use test_helpers::{cmdline::envp, text::unquote};

fn upsert(
    resolution_context: &ResolutionContext,
    raw_name: &str,
    update: impl FnOnce(Key) -> Key,
) -> Result<()> {
    let name = KeyName::parse(unquote(raw_name))?;
    let mut store = resolution_context.store.take().unwrap_or_default();
    let existing = store
        .lookup(&name)
        .cloned()
        .unwrap_or_else(|| Key::from_name(name));
    store.append(update(existing));
    resolution_context.store.set(store);
    Ok(())
}

#[given("the specification key {name} has {meta} set to {value}")]
fn spec_meta(
    resolution_context: &ResolutionContext,
    name: String,
    meta: String,
    value: String,
) -> Result<()> {
    upsert(resolution_context, &name, |key| {
        key.with_meta(unquote(&meta), unquote(&value))
    })
}

#[given("the store already contains {name} with value {value}")]
fn existing_value(
    resolution_context: &ResolutionContext,
    name: String,
    value: String,
) -> Result<()> {
    upsert(resolution_context, &name, |key| key.with_value(unquote(&value)))
}

#[given("the environment variable {name} is {value}")]
fn env_var(resolution_context: &ResolutionContext, name: String, value: String) {
    let mut entries = resolution_context.envp.take().unwrap_or_default();
    entries.extend(envp([(unquote(&name), unquote(&value))]));
    resolution_context.envp.set(entries);
}

#[given("posix mode is enabled")]
fn posix_mode(resolution_context: &ResolutionContext) -> Result<()> {
    let error_key = match resolution_context.error_key.take() {
        Some(existing) => existing,
        None => Key::new("/sw/app")?,
    };
    resolution_context
        .error_key
        .set(error_key.with_meta(POSIXLY_META, "1"));
    Ok(())
}
