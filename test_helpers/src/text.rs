//! Placeholder normalisation for behavioural test steps.

/// Trims `value` and strips one layer of matching single or double quotes.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(quote)
                .and_then(|inner| inner.strip_suffix(quote))
        })
        .unwrap_or(trimmed)
}

/// Splits a comma-separated list of quoted values, as written in feature
/// files: `"a", "b", "c"`. An empty or blank list yields no values.
#[must_use]
pub fn quoted_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split(',')
        .map(|item| unquote(item).to_owned())
        .collect()
}
