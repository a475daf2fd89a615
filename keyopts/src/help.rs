//! Usage line and options list rendering.
//!
//! The engine never prints. Generated texts are stored on the error key and
//! [`help_message`] assembles them for the caller.

use crate::spec::{KeyBinding, Specification};
use crate::store::Key;

/// Error key metadata holding the generated usage line.
pub const HELP_USAGE_META: &str = "internal/libopts/help/usage";
/// Error key metadata holding the generated options list.
pub const HELP_OPTIONS_META: &str = "internal/libopts/help/options";
/// Error key metadata replacing the generated usage line.
pub const USAGE_OVERRIDE_META: &str = "help/usage";
/// Error key metadata inserted between usage line and options list.
pub const PREFIX_META: &str = "help/prefix";

/// Returns the last `/`-separated segment of `argv0`.
#[must_use]
pub fn program_name(argv0: &str) -> &str {
    argv0.rsplit('/').next().unwrap_or(argv0)
}

/// Renders `Usage: <program>[ [OPTION]...][ [ARG]...]` plus a newline.
#[must_use]
pub fn usage_line(program: &str, has_opts: bool, has_args: bool) -> String {
    let opts = if has_opts { " [OPTION]..." } else { "" };
    let args = if has_args { " [ARG]..." } else { "" };
    format!("Usage: {program}{opts}{args}\n")
}

/// Renders the `OPTIONS` section, or `""` when nothing is bound.
#[must_use]
pub fn options_list(bindings: &[KeyBinding]) -> String {
    if bindings.is_empty() {
        return String::new();
    }
    let mut list = String::from("OPTIONS");
    for line in bindings.iter().filter_map(KeyBinding::help_line) {
        list.push('\n');
        list.push_str(line);
    }
    list.push('\n');
    list
}

/// Stores the usage line and options list for `spec` on `error_key`.
pub fn attach_help(spec: &Specification, argv0: &str, error_key: &mut Key) {
    let usage = usage_line(program_name(argv0), spec.has_opts(), spec.has_args());
    error_key.set_meta(HELP_USAGE_META, usage);
    error_key.set_meta(HELP_OPTIONS_META, options_list(spec.bindings()));
}

/// Assembles the full help text from `error_key`.
///
/// `help/usage` replaces the generated usage line and `help/prefix` is
/// inserted before the options list. Returns `None` when no usage line is
/// available, which is the case unless help was requested.
#[must_use]
pub fn help_message(error_key: &Key) -> Option<String> {
    let usage = error_key
        .meta(USAGE_OVERRIDE_META)
        .or_else(|| error_key.meta(HELP_USAGE_META))?;
    let prefix = error_key.meta(PREFIX_META).unwrap_or_default();
    let options = error_key.meta(HELP_OPTIONS_META).unwrap_or_default();
    Some(format!("{usage}{prefix}{options}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::KeySet;
    use rstest::rstest;

    #[rstest]
    #[case("/usr/bin/app", "app")]
    #[case("app", "app")]
    #[case("./bin/", "")]
    fn program_name_is_last_segment(#[case] argv0: &str, #[case] expected: &str) {
        assert_eq!(program_name(argv0), expected);
    }

    #[rstest]
    #[case(false, false, "Usage: app\n")]
    #[case(true, false, "Usage: app [OPTION]...\n")]
    #[case(false, true, "Usage: app [ARG]...\n")]
    #[case(true, true, "Usage: app [OPTION]... [ARG]...\n")]
    fn usage_line_lists_present_clauses(
        #[case] has_opts: bool,
        #[case] has_args: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(usage_line("app", has_opts, has_args), expected);
    }

    fn spec(keys: Vec<Key>) -> Specification {
        Specification::compile(&keys.into_iter().collect::<KeySet>()).expect("valid specification")
    }

    #[test]
    fn options_list_joins_visible_lines() {
        let spec = spec(vec![
            Key::new("spec/sw/app/a")
                .expect("key")
                .with_meta("opt", "a")
                .with_meta("opt/arg", "none")
                .with_meta("opt/help", "First"),
            Key::new("spec/sw/app/b")
                .expect("key")
                .with_meta("env", "B"),
            Key::new("spec/sw/app/c")
                .expect("key")
                .with_meta("opt/long", "cee")
                .with_meta("opt/arg", "none")
                .with_meta("description", "Third"),
        ]);
        assert_eq!(
            options_list(spec.bindings()),
            format!(
                "OPTIONS\n  -a{}First\n  --cee{}Third\n",
                " ".repeat(26),
                " ".repeat(23)
            )
        );
    }

    #[test]
    fn options_list_is_empty_without_bindings() {
        assert_eq!(options_list(&[]), "");
    }

    #[test]
    fn help_message_requires_a_usage_line() {
        let key = Key::new("/error").expect("key");
        assert_eq!(help_message(&key), None);
    }

    #[test]
    fn help_message_honours_overrides() {
        let spec = spec(vec![
            Key::new("spec/sw/app/a")
                .expect("key")
                .with_meta("opt", "a")
                .with_meta("opt/arg", "none"),
        ]);
        let mut key = Key::new("/error").expect("key");
        attach_help(&spec, "/bin/app", &mut key);
        let generated = help_message(&key).expect("help attached");
        assert!(generated.starts_with("Usage: app [OPTION]...\nOPTIONS\n  -a"));

        key.set_meta(USAGE_OVERRIDE_META, "Usage: custom\n");
        key.set_meta(PREFIX_META, "Does things.\n\n");
        let custom = help_message(&key).expect("help attached");
        assert!(custom.starts_with("Usage: custom\nDoes things.\n\nOPTIONS\n"));
    }
}
