//! Picks one value source per binding and stages the resulting `proc` keys.
//!
//! Sources are tried in [`PRECEDENCE`] order. Within one source the bound
//! identities (or variables) are tried in registration order and at most one
//! of them may carry a value; a second one is reported as a conflict.

mod write;

use std::fmt;

pub(crate) use write::Staging;

use crate::config::ParseOptions;
use crate::error::{OptsError, UsageViolation};
use crate::parse::{EnvTable, ParsedArgs, split_env_value};
use crate::spec::{Identity, KeyBinding, Kind};

/// A place a binding's value can come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    /// A short option such as `-v`.
    ShortOption,
    /// A long option such as `--verbose`.
    LongOption,
    /// A bound environment variable.
    Environment,
    /// The leftover positional arguments.
    Positional,
}

/// Order in which sources are consulted; the first source yielding a value
/// wins and the rest are skipped.
pub const PRECEDENCE: [ResolutionSource; 4] = [
    ResolutionSource::ShortOption,
    ResolutionSource::LongOption,
    ResolutionSource::Environment,
    ResolutionSource::Positional,
];

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ShortOption => "short option",
            Self::LongOption => "long option",
            Self::Environment => "environment variable",
            Self::Positional => "positional arguments",
        })
    }
}

/// Final value for one binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedValue {
    /// Written as one key.
    Scalar(String),
    /// Written as `#0..#N` children plus the parent.
    Array(Vec<String>),
}

/// The value chosen for a binding and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    source: ResolutionSource,
    origin: String,
    value: ResolvedValue,
}

impl Resolution {
    /// Source that supplied the value.
    #[must_use]
    pub const fn source(&self) -> ResolutionSource {
        self.source
    }

    /// Option (with dashes), variable name, or `--` for positionals.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The value to write.
    #[must_use]
    pub const fn value(&self) -> &ResolvedValue {
        &self.value
    }

    pub(crate) fn into_value(self) -> ResolvedValue {
        self.value
    }
}

/// Chooses values for bindings from parsed arguments and the environment.
#[derive(Debug)]
pub struct Resolver<'a> {
    args: &'a ParsedArgs,
    env: &'a EnvTable,
    options: ParseOptions,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over one call's inputs.
    #[must_use]
    pub const fn new(args: &'a ParsedArgs, env: &'a EnvTable, options: ParseOptions) -> Self {
        Self { args, env, options }
    }

    /// Resolves `binding`, or returns `None` when no source supplies it.
    ///
    /// # Errors
    ///
    /// Returns [`OptsError::IllegalUse`] when two identities or two
    /// variables of the same source both supply the binding.
    pub fn resolve(&self, binding: &KeyBinding) -> Result<Option<Resolution>, OptsError> {
        for source in PRECEDENCE {
            if let Some(resolution) = self.try_source(source, binding)? {
                tracing::trace!(
                    key = %binding.key(),
                    %source,
                    origin = resolution.origin(),
                    "resolved binding"
                );
                return Ok(Some(resolution));
            }
        }
        Ok(None)
    }

    fn try_source(
        &self,
        source: ResolutionSource,
        binding: &KeyBinding,
    ) -> Result<Option<Resolution>, OptsError> {
        match source {
            ResolutionSource::ShortOption => self.by_option(binding, source, Identity::is_short),
            ResolutionSource::LongOption => {
                self.by_option(binding, source, |identity| !identity.is_short())
            }
            ResolutionSource::Environment => self.by_environment(binding),
            ResolutionSource::Positional => Ok(self.by_positional(binding)),
        }
    }

    fn by_option(
        &self,
        binding: &KeyBinding,
        source: ResolutionSource,
        selects: impl Fn(&Identity) -> bool,
    ) -> Result<Option<Resolution>, OptsError> {
        let mut found: Option<Resolution> = None;
        for identity in binding.options().iter().filter(|identity| selects(identity)) {
            let Some(parsed) = self.args.get(identity) else {
                continue;
            };
            if let Some(first) = &found {
                return Err(conflict(identity.to_string(), first, binding));
            }
            let values = parsed.value().values();
            let value = match binding.kind() {
                Kind::Single => {
                    ResolvedValue::Scalar(values.first().cloned().unwrap_or_default())
                }
                Kind::Array => ResolvedValue::Array(values.to_vec()),
            };
            found = Some(Resolution {
                source,
                origin: identity.to_string(),
                value,
            });
        }
        Ok(found)
    }

    fn by_environment(&self, binding: &KeyBinding) -> Result<Option<Resolution>, OptsError> {
        let mut found: Option<Resolution> = None;
        for name in binding.env_vars() {
            let Some(raw) = self.env.get(name) else {
                continue;
            };
            if let Some(first) = &found {
                return Err(conflict(name.clone(), first, binding));
            }
            let value = match binding.kind() {
                Kind::Single => ResolvedValue::Scalar(raw.to_owned()),
                Kind::Array => ResolvedValue::Array(
                    split_env_value(raw, self.options.separator()).into_values(),
                ),
            };
            found = Some(Resolution {
                source: ResolutionSource::Environment,
                origin: name.clone(),
                value,
            });
        }
        Ok(found)
    }

    fn by_positional(&self, binding: &KeyBinding) -> Option<Resolution> {
        binding.collects_remaining_args().then(|| Resolution {
            source: ResolutionSource::Positional,
            origin: "--".to_owned(),
            value: ResolvedValue::Array(self.args.positional().to_vec()),
        })
    }
}

fn conflict(subject: String, first: &Resolution, binding: &KeyBinding) -> OptsError {
    OptsError::illegal_use(
        subject,
        UsageViolation::ConflictingSource {
            other: first.origin.clone(),
            key: binding.key().to_string(),
        },
    )
}
