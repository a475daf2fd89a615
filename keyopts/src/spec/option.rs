//! Option identities and descriptors.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::SpecViolation;
use crate::store::KeyName;

/// Short character or long name uniquely denoting one option.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identity {
    /// `-c`
    Short(char),
    /// `--name`
    Long(String),
}

impl Identity {
    /// Identity of the built-in short help option.
    pub const HELP_SHORT: Self = Self::Short('h');
    /// Long name of the built-in help option.
    pub const HELP_LONG: &'static str = "help";

    /// Whether this is a short identity.
    #[must_use]
    pub const fn is_short(&self) -> bool {
        matches!(self, Self::Short(_))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short(c) => write!(f, "-{c}"),
            Self::Long(name) => write!(f, "--{name}"),
        }
    }
}

/// Whether an option takes an argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HasArg {
    /// Never takes an argument; the flag value is recorded.
    None,
    /// Always takes an argument.
    #[default]
    Required,
    /// Takes an argument only as `--name=value`.
    Optional,
}

impl HasArg {
    /// Parses an `opt/arg` metadata value.
    ///
    /// # Errors
    ///
    /// Returns [`SpecViolation::UnknownArgMode`] for anything other than
    /// `none`, `required` or `optional`.
    pub fn parse(raw: &str) -> Result<Self, SpecViolation> {
        match raw {
            "none" => Ok(Self::None),
            "required" => Ok(Self::Required),
            "optional" => Ok(Self::Optional),
            other => Err(SpecViolation::UnknownArgMode(other.to_owned())),
        }
    }
}

/// Whether a binding holds one value or an ordered array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// One scalar value.
    Single,
    /// Repeatable; values collect in order.
    Array,
}

impl Kind {
    /// Array for keys whose basename is the array wildcard, single otherwise.
    #[must_use]
    pub fn of(key: &KeyName) -> Self {
        if key.is_array_wildcard() {
            Self::Array
        } else {
            Self::Single
        }
    }
}

/// What an option feeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionTarget {
    /// The built-in help option.
    Help,
    /// A specification key.
    Key(KeyName),
}

/// Descriptor of one option identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSpec {
    pub(crate) identity: Identity,
    pub(crate) has_arg: HasArg,
    pub(crate) kind: Kind,
    pub(crate) flag_value: String,
    pub(crate) hidden: bool,
    pub(crate) target: OptionTarget,
}

impl OptionSpec {
    fn help(identity: Identity) -> Self {
        Self {
            identity,
            has_arg: HasArg::None,
            kind: Kind::Single,
            flag_value: "1".to_owned(),
            hidden: false,
            target: OptionTarget::Help,
        }
    }

    /// The identity this descriptor is registered under.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Argument mode.
    #[must_use]
    pub const fn has_arg(&self) -> HasArg {
        self.has_arg
    }

    /// Single or array.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Value recorded when no argument is given.
    #[must_use]
    pub fn flag_value(&self) -> &str {
        &self.flag_value
    }

    /// Whether the option is excluded from help.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// What the option feeds.
    #[must_use]
    pub const fn target(&self) -> &OptionTarget {
        &self.target
    }
}

/// Identity table consulted by the argument parser.
///
/// Always contains the built-in `-h` and `--help`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionTable {
    options: BTreeMap<Identity, OptionSpec>,
}

impl Default for OptionTable {
    fn default() -> Self {
        let long_help = Identity::Long(Identity::HELP_LONG.to_owned());
        let options = [Identity::HELP_SHORT, long_help]
            .into_iter()
            .map(|identity| (identity.clone(), OptionSpec::help(identity)))
            .collect();
        Self { options }
    }
}

impl OptionTable {
    /// Looks up the descriptor for `identity`.
    #[must_use]
    pub fn get(&self, identity: &Identity) -> Option<&OptionSpec> {
        self.options.get(identity)
    }

    /// Number of registered identities, including the built-in help.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always `false`: the built-in help identities are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Registers `spec`, or returns the target already holding its identity.
    pub(crate) fn register(&mut self, spec: OptionSpec) -> Result<(), OptionTarget> {
        if let Some(existing) = self.options.get(&spec.identity) {
            return Err(existing.target.clone());
        }
        self.options.insert(spec.identity.clone(), spec);
        Ok(())
    }
}
