//! Builders for argument and environment vectors.

use anyhow::{Result, anyhow};

/// Splits a shell-style command line into `argv` words.
///
/// Quoting and backslash escapes follow POSIX shell rules. A blank line
/// yields no words.
///
/// # Errors
///
/// Fails when the line cannot be tokenised, e.g. on an unterminated quote.
///
/// # Examples
///
/// ```
/// use keyopts_test_helpers::cmdline::tokenise;
///
/// let words = tokenise(r"app --name='two words' two\ parts ''")?;
/// assert_eq!(words, ["app", "--name=two words", "two parts", ""]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn tokenise(line: &str) -> Result<Vec<String>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    shlex::split(trimmed).ok_or_else(|| anyhow!("failed to tokenise command line {line:?}"))
}

/// Builds `NAME=value` entries from pairs.
pub fn envp<I, K, V>(vars: I) -> Vec<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    vars.into_iter()
        .map(|(name, value)| format!("{}={}", name.as_ref(), value.as_ref()))
        .collect()
}
