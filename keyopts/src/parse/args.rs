//! Command-line scanning against the compiled identity table.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::ParseOptions;
use crate::error::{OptsError, UsageViolation};
use crate::spec::{HasArg, Identity, Kind, OptionSpec, OptionTable, OptionTarget};
use crate::store::KeyName;

/// Value(s) recorded for one option identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionValue {
    /// Non-repeatable option.
    Single(String),
    /// Repeatable option; values in command-line order.
    Array(Vec<String>),
}

impl OptionValue {
    fn new(kind: Kind, value: String) -> Self {
        match kind {
            Kind::Single => Self::Single(value),
            Kind::Array => Self::Array(vec![value]),
        }
    }

    /// All recorded values in order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Array(values) => values,
        }
    }
}

/// Runtime result for one identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedOption {
    value: OptionValue,
    short: bool,
}

impl ParsedOption {
    /// Recorded value(s).
    #[must_use]
    pub const fn value(&self) -> &OptionValue {
        &self.value
    }

    /// Whether the value came from a short form.
    #[must_use]
    pub const fn is_short(&self) -> bool {
        self.short
    }
}

/// Options found on the command line plus the leftover positionals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    options: BTreeMap<Identity, ParsedOption>,
    positional: Vec<String>,
}

impl ParsedArgs {
    /// Scans `argv`, skipping the program name at index 0.
    ///
    /// # Errors
    ///
    /// Returns [`OptsError::UnknownOption`] for undeclared identities and
    /// [`OptsError::IllegalUse`] for missing or unexpected arguments and
    /// repeated non-array options. Scanning stops at the first error.
    pub fn parse<S: AsRef<str>>(
        table: &OptionTable,
        argv: &[S],
        options: ParseOptions,
    ) -> Result<Self, OptsError> {
        let mut scanner = Scanner {
            table,
            argv,
            parsed: Self::default(),
            short_bound: BTreeSet::new(),
        };
        scanner.run(options)?;
        Ok(scanner.parsed)
    }

    /// Looks up the value recorded for `identity`.
    #[must_use]
    pub fn get(&self, identity: &Identity) -> Option<&ParsedOption> {
        self.options.get(identity)
    }

    /// Positional arguments in command-line order.
    #[must_use]
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Whether `-h` or `--help` was given.
    #[must_use]
    pub fn help_requested(&self) -> bool {
        self.options.contains_key(&Identity::HELP_SHORT)
            || self
                .options
                .contains_key(&Identity::Long(Identity::HELP_LONG.to_owned()))
    }
}

struct Scanner<'t, 'a, S> {
    table: &'t OptionTable,
    argv: &'a [S],
    parsed: ParsedArgs,
    /// Keys that already received a value from a short form.
    short_bound: BTreeSet<KeyName>,
}

impl<S: AsRef<str>> Scanner<'_, '_, S> {
    fn run(&mut self, options: ParseOptions) -> Result<(), OptsError> {
        let mut index = 1;
        while let Some(arg) = self.argv.get(index).map(AsRef::as_ref) {
            if arg == "--" {
                index += 1;
                break;
            }
            if let Some(long) = arg.strip_prefix("--") {
                self.parse_long(long, &mut index)?;
            } else if let Some(cluster) = arg.strip_prefix('-').filter(|c| !c.is_empty()) {
                self.parse_short_cluster(cluster, &mut index)?;
            } else if options.is_posixly() {
                break;
            } else {
                self.parsed.positional.push(arg.to_owned());
            }
            index += 1;
        }

        let rest = self.argv.get(index..).unwrap_or_default();
        self.parsed
            .positional
            .extend(rest.iter().map(|arg| arg.as_ref().to_owned()));
        tracing::trace!(
            options = self.parsed.options.len(),
            positional = self.parsed.positional.len(),
            "scanned arguments"
        );
        Ok(())
    }

    fn parse_long(&mut self, body: &str, index: &mut usize) -> Result<(), OptsError> {
        let (name, inline) = body
            .split_once('=')
            .map_or((body, None), |(name, value)| (name, Some(value)));
        let identity = Identity::Long(name.to_owned());
        let table = self.table;
        let spec = table
            .get(&identity)
            .ok_or_else(|| OptsError::unknown_option(identity.to_string()))?;

        let value = match spec.has_arg() {
            HasArg::Required => match inline {
                Some(value) => value.to_owned(),
                None => self.next_argument(index, &identity)?,
            },
            HasArg::Optional => inline.map_or_else(|| spec.flag_value().to_owned(), str::to_owned),
            HasArg::None => {
                if inline.is_some() {
                    return Err(OptsError::illegal_use(
                        identity.to_string(),
                        UsageViolation::UnexpectedArgument,
                    ));
                }
                spec.flag_value().to_owned()
            }
        };

        // The argument is consumed either way.
        if self.short_supplied(spec) {
            tracing::trace!(option = %identity, "ignoring long option, short form already given");
            return Ok(());
        }
        self.check_repeat(spec)?;
        self.record(spec, value, false);
        Ok(())
    }

    fn parse_short_cluster(&mut self, cluster: &str, index: &mut usize) -> Result<(), OptsError> {
        let table = self.table;
        for (offset, option) in cluster.char_indices() {
            let identity = Identity::Short(option);
            let spec = table
                .get(&identity)
                .ok_or_else(|| OptsError::unknown_option(identity.to_string()))?;
            self.check_repeat(spec)?;

            if spec.has_arg() == HasArg::Required {
                let rest = cluster
                    .get(offset + option.len_utf8()..)
                    .unwrap_or_default();
                let value = if rest.is_empty() {
                    self.next_argument(index, &identity)?
                } else {
                    rest.to_owned()
                };
                self.record(spec, value, true);
                return Ok(());
            }
            self.record(spec, spec.flag_value().to_owned(), true);
        }
        Ok(())
    }

    /// Consumes the next argv entry as the argument of `identity`.
    fn next_argument(&self, index: &mut usize, identity: &Identity) -> Result<String, OptsError> {
        *index += 1;
        self.argv
            .get(*index)
            .map(|arg| arg.as_ref().to_owned())
            .ok_or_else(|| {
                OptsError::illegal_use(identity.to_string(), UsageViolation::MissingArgument)
            })
    }

    /// Whether a short form already gave the single-valued key of `spec`.
    fn short_supplied(&self, spec: &OptionSpec) -> bool {
        if spec.kind() == Kind::Array {
            return false;
        }
        match spec.target() {
            OptionTarget::Key(key) => self.short_bound.contains(key),
            OptionTarget::Help => false,
        }
    }

    fn check_repeat(&self, spec: &OptionSpec) -> Result<(), OptsError> {
        if spec.kind() == Kind::Single && self.parsed.options.contains_key(spec.identity()) {
            return Err(OptsError::illegal_use(
                spec.identity().to_string(),
                UsageViolation::NotRepeatable,
            ));
        }
        Ok(())
    }

    fn record(&mut self, spec: &OptionSpec, value: String, short: bool) {
        tracing::trace!(option = %spec.identity(), %value, "recorded option");
        match self.parsed.options.get_mut(spec.identity()) {
            Some(ParsedOption {
                value: OptionValue::Array(values),
                ..
            }) => values.push(value),
            _ => {
                self.parsed.options.insert(
                    spec.identity().clone(),
                    ParsedOption {
                        value: OptionValue::new(spec.kind(), value),
                        short,
                    },
                );
            }
        }
        if short && let OptionTarget::Key(key) = spec.target() {
            self.short_bound.insert(key.clone());
        }
    }
}
