//! Assertions on the resolution result, the store and the error key.

use crate::fixtures::ResolutionContext;
use anyhow::{Context, Result, anyhow, ensure};
use keyopts::{ERROR_META, ERROR_REASON_META, KeyName, KeySet, OptsError, Outcome, help_message};
use rstest_bdd_macros::then;
use test_helpers::text::{quoted_list, unquote};

fn result(resolution_context: &ResolutionContext) -> Result<Result<Outcome, OptsError>> {
    resolution_context
        .result
        .get()
        .context("options have not been resolved")
}

fn store(resolution_context: &ResolutionContext) -> Result<KeySet> {
    resolution_context.store.get().context("store unavailable")
}

fn error(resolution_context: &ResolutionContext) -> Result<OptsError> {
    match result(resolution_context)? {
        Ok(outcome) => Err(anyhow!("expected an error, got {outcome:?}")),
        Err(err) => Ok(err),
    }
}

#[then("resolution succeeds")]
fn succeeds(resolution_context: &ResolutionContext) -> Result<()> {
    let actual = result(resolution_context)?;
    ensure!(actual == Ok(Outcome::Resolved), "unexpected result {actual:?}");
    Ok(())
}

#[then("help is requested")]
fn help_requested(resolution_context: &ResolutionContext) -> Result<()> {
    let actual = result(resolution_context)?;
    ensure!(actual == Ok(Outcome::HelpRequested), "unexpected result {actual:?}");
    Ok(())
}

#[then("the store is unchanged")]
fn store_unchanged(resolution_context: &ResolutionContext) -> Result<()> {
    let before = resolution_context
        .before
        .get()
        .context("options have not been resolved")?;
    ensure!(store(resolution_context)? == before, "the store was modified");
    Ok(())
}

#[then("the resolved key {name} is {value}")]
fn resolved_value(
    resolution_context: &ResolutionContext,
    name: String,
    value: String,
) -> Result<()> {
    let ks = store(resolution_context)?;
    let actual = ks.lookup_str(unquote(&name)).map(keyopts::Key::value);
    ensure!(
        actual == Some(unquote(&value)),
        "{name} holds {actual:?}, expected {value}"
    );
    Ok(())
}

#[then("no value is resolved for {name}")]
fn no_value(resolution_context: &ResolutionContext, name: String) -> Result<()> {
    let ks = store(resolution_context)?;
    ensure!(
        ks.lookup_str(unquote(&name)).is_none(),
        "{name} was resolved"
    );
    Ok(())
}

#[then("the resolved array {name} is {values}")]
fn resolved_array(
    resolution_context: &ResolutionContext,
    name: String,
    values: String,
) -> Result<()> {
    let ks = store(resolution_context)?;
    let parent = KeyName::parse(unquote(&name))?;
    let actual = ks.array_values(&parent);
    let expected = quoted_list(&values);
    ensure!(
        actual == expected,
        "{name} holds {actual:?}, expected {expected:?}"
    );
    Ok(())
}

#[then("resolution fails with {kind}")]
fn fails_with(resolution_context: &ResolutionContext, kind: String) -> Result<()> {
    let err = error(resolution_context)?;
    let label = unquote(&kind);
    ensure!(err.kind().as_str() == label, "unexpected error {err:?}");
    let error_key = resolution_context
        .error_key
        .get()
        .context("error key unavailable")?;
    ensure!(error_key.meta(ERROR_META) == Some(label));
    ensure!(error_key.meta(ERROR_REASON_META) == Some(err.to_string().as_str()));
    Ok(())
}

#[then("the error message is {message}")]
fn error_message(resolution_context: &ResolutionContext, message: String) -> Result<()> {
    let err = error(resolution_context)?;
    ensure!(err.to_string() == unquote(&message), "unexpected message: {err}");
    Ok(())
}

#[then("the help text contains {line}")]
fn help_contains(resolution_context: &ResolutionContext, line: String) -> Result<()> {
    let error_key = resolution_context
        .error_key
        .get()
        .context("error key unavailable")?;
    let help = help_message(&error_key).context("no help text attached")?;
    let expected = unquote(&line);
    ensure!(
        help.lines().any(|candidate| candidate == expected),
        "help text lacks {expected:?}:\n{help}"
    );
    Ok(())
}
