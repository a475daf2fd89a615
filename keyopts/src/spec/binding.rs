//! Bindings between specification keys and their value sources.

use super::option::{HasArg, Identity, Kind};
use crate::store::KeyName;

/// Width of the option column in help output.
const HELP_COLUMN: usize = 30;

/// A specification key and everything that can supply its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub(crate) key: KeyName,
    pub(crate) kind: Kind,
    pub(crate) options: Vec<Identity>,
    pub(crate) env_vars: Vec<String>,
    pub(crate) remaining_args: bool,
    pub(crate) help_line: Option<String>,
}

impl KeyBinding {
    pub(crate) fn new(key: KeyName) -> Self {
        let kind = Kind::of(&key);
        Self {
            key,
            kind,
            options: Vec::new(),
            env_vars: Vec::new(),
            remaining_args: false,
            help_line: None,
        }
    }

    /// Specification key name.
    #[must_use]
    pub const fn key(&self) -> &KeyName {
        &self.key
    }

    /// Single or array.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Option identities in registration order.
    #[must_use]
    pub fn options(&self) -> &[Identity] {
        &self.options
    }

    /// Environment variable names in registration order.
    #[must_use]
    pub fn env_vars(&self) -> &[String] {
        &self.env_vars
    }

    /// Whether leftover positional arguments are collected here.
    #[must_use]
    pub const fn collects_remaining_args(&self) -> bool {
        self.remaining_args
    }

    /// Generated help line, if the binding has visible options.
    #[must_use]
    pub fn help_line(&self) -> Option<&str> {
        self.help_line.as_deref()
    }

    pub(crate) const fn is_bound(&self) -> bool {
        !self.options.is_empty() || !self.env_vars.is_empty() || self.remaining_args
    }
}

/// Collects the visible option forms of one key for its help line.
#[derive(Debug, Default)]
pub(crate) struct HelpParts {
    short: Vec<String>,
    long: Vec<String>,
}

impl HelpParts {
    pub(crate) fn push_short(&mut self, option: char) {
        self.short.push(format!("-{option}"));
    }

    pub(crate) fn push_long(&mut self, name: &str, has_arg: HasArg, arg_name: Option<&str>) {
        let shown = arg_name.unwrap_or("ARG");
        let placeholder = match has_arg {
            HasArg::None => String::new(),
            HasArg::Required => format!("={shown}"),
            HasArg::Optional => format!("=[{shown}]"),
        };
        self.long.push(format!("--{name}{placeholder}"));
    }

    /// Renders `  <options><padding><help>`, wrapping long option lists onto
    /// their own line.
    pub(crate) fn render(&self, help: &str) -> Option<String> {
        let forms: Vec<&str> = self
            .short
            .iter()
            .chain(&self.long)
            .map(String::as_str)
            .collect();
        if forms.is_empty() {
            return None;
        }
        let part = forms.join(", ");
        let column = HELP_COLUMN;
        let width = column - 2;
        Some(if part.chars().count() < column {
            format!("  {part:<width$}{help}")
        } else {
            format!("  {part}\n  {:column$}{help}", "")
        })
    }
}
