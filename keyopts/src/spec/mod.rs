//! Compiles the `spec` namespace into option and binding tables.
//!
//! Every key in the `spec` namespace may declare options (`opt`, `opt/long`,
//! `opt/#N`, ...), environment variables (`env`, `env/#N`) and the
//! remaining-arguments marker (`args = remaining`). [`Specification::compile`]
//! validates all of them up front; any violation aborts the whole compilation
//! so no partial table ever reaches the parser.

mod binding;
mod option;

use std::collections::BTreeMap;

pub use binding::KeyBinding;
pub use option::{HasArg, Identity, Kind, OptionSpec, OptionTable, OptionTarget};

use binding::HelpParts;

use crate::error::{OptsError, SpecViolation};
use crate::meta_array::{MetaArray, MetaEntry, OptField, non_empty_meta};
use crate::store::{Key, KeyName, KeySet, Namespace};

const OPT: &str = "opt";
const OPT_LONG: &str = "opt/long";
const OPT_HELP: &str = "opt/help";
const DESCRIPTION: &str = "description";
const ENV: &str = "env";
const ARGS: &str = "args";
const ARGS_REMAINING: &str = "remaining";

/// Tables derived from the specification namespace for one call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Specification {
    options: OptionTable,
    bindings: Vec<KeyBinding>,
    has_opts: bool,
    has_args: bool,
}

impl Specification {
    /// Compiles every `spec` key of `ks`, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`OptsError::IllegalSpecification`] for duplicate or reserved
    /// identities, duplicate environment bindings, `flagvalue` with a
    /// required argument, unknown argument modes, and `args=remaining` on a
    /// non-array key.
    pub fn compile(ks: &KeySet) -> Result<Self, OptsError> {
        let mut compiler = Compiler::default();
        for key in ks.iter() {
            if key.name().namespace() == Namespace::Spec {
                compiler.compile_key(key)?;
            }
        }
        tracing::debug!(
            options = compiler.spec.options.len(),
            bindings = compiler.spec.bindings.len(),
            "compiled option specification"
        );
        Ok(compiler.spec)
    }

    /// Identity table, including the built-in help options.
    #[must_use]
    pub const fn options(&self) -> &OptionTable {
        &self.options
    }

    /// Bindings in registration order.
    #[must_use]
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Whether any visible option exists.
    #[must_use]
    pub const fn has_opts(&self) -> bool {
        self.has_opts
    }

    /// Whether any binding collects remaining arguments.
    #[must_use]
    pub const fn has_args(&self) -> bool {
        self.has_args
    }
}

/// Settings shared by the short and long form of one `opt` entry.
struct OptionData<'k> {
    has_arg: HasArg,
    flag_value: &'k str,
    arg_name: Option<&'k str>,
    hidden: bool,
}

impl<'k> OptionData<'k> {
    fn read(key: &'k Key, entry: &MetaEntry) -> Result<Self, OptsError> {
        let illegal = |reason| OptsError::illegal_spec(key.name(), reason);
        let has_arg = entry
            .field(key, OptField::Arg)
            .map(HasArg::parse)
            .transpose()
            .map_err(illegal)?
            .unwrap_or_default();
        let flag_value = match entry.field(key, OptField::FlagValue) {
            None => "1",
            Some(_) if has_arg == HasArg::Required => {
                return Err(illegal(SpecViolation::FlagValueWithRequiredArg));
            }
            Some(value) => value,
        };
        Ok(Self {
            has_arg,
            flag_value,
            arg_name: entry.field(key, OptField::ArgHelp),
            hidden: entry.field(key, OptField::NoHelp) == Some("1"),
        })
    }
}

#[derive(Default)]
struct Compiler {
    spec: Specification,
    env_vars: BTreeMap<String, KeyName>,
}

impl Compiler {
    fn compile_key(&mut self, key: &Key) -> Result<(), OptsError> {
        let mut binding = KeyBinding::new(key.name().clone());
        self.compile_options(key, &mut binding)?;
        self.compile_env_vars(key, &mut binding)?;

        if non_empty_meta(key, ARGS) == Some(ARGS_REMAINING) {
            if binding.kind != Kind::Array {
                return Err(OptsError::illegal_spec(
                    key.name(),
                    SpecViolation::RemainingArgsOnNonArray,
                ));
            }
            binding.remaining_args = true;
            self.spec.has_args = true;
        }

        if binding.is_bound() {
            tracing::trace!(
                key = %binding.key,
                options = binding.options.len(),
                env = binding.env_vars.len(),
                remaining = binding.remaining_args,
                "registered key binding"
            );
            self.spec.bindings.push(binding);
        }
        Ok(())
    }

    fn compile_options(&mut self, key: &Key, binding: &mut KeyBinding) -> Result<(), OptsError> {
        let mut entries = MetaArray::read(key, OPT);
        if entries.is_absent() && non_empty_meta(key, OPT_LONG).is_some() {
            entries = MetaArray::implicit(OPT);
        }

        let mut help = HelpParts::default();
        for entry in entries.entries() {
            let data = OptionData::read(key, entry)?;
            if let Some(short) = entry.value().chars().next() {
                self.register_short(key, binding, short, &data)?;
                if !data.hidden {
                    help.push_short(short);
                }
            }
            if let Some(long) = entry.field(key, OptField::Long) {
                self.register_long(key, binding, long, &data)?;
                if !data.hidden {
                    help.push_long(long, data.has_arg, data.arg_name);
                }
            }
        }

        let text = non_empty_meta(key, OPT_HELP)
            .or_else(|| non_empty_meta(key, DESCRIPTION))
            .unwrap_or_default();
        binding.help_line = help.render(text);
        Ok(())
    }

    fn register_short(
        &mut self,
        key: &Key,
        binding: &mut KeyBinding,
        short: char,
        data: &OptionData<'_>,
    ) -> Result<(), OptsError> {
        match short {
            '-' => Err(OptsError::illegal_spec(
                key.name(),
                SpecViolation::DashShortOption,
            )),
            'h' => Err(OptsError::illegal_spec(
                key.name(),
                SpecViolation::ReservedShortOption,
            )),
            _ => self.register(key, binding, Identity::Short(short), data),
        }
    }

    fn register_long(
        &mut self,
        key: &Key,
        binding: &mut KeyBinding,
        long: &str,
        data: &OptionData<'_>,
    ) -> Result<(), OptsError> {
        if long == Identity::HELP_LONG {
            return Err(OptsError::illegal_spec(
                key.name(),
                SpecViolation::ReservedLongOption,
            ));
        }
        self.register(key, binding, Identity::Long(long.to_owned()), data)
    }

    fn register(
        &mut self,
        key: &Key,
        binding: &mut KeyBinding,
        identity: Identity,
        data: &OptionData<'_>,
    ) -> Result<(), OptsError> {
        let spec = OptionSpec {
            identity: identity.clone(),
            has_arg: data.has_arg,
            kind: binding.kind,
            flag_value: data.flag_value.to_owned(),
            hidden: data.hidden,
            target: OptionTarget::Key(key.name().clone()),
        };
        self.spec.options.register(spec).map_err(|previous| {
            let existing = match previous {
                OptionTarget::Help => "help".to_owned(),
                OptionTarget::Key(name) => name.to_string(),
            };
            OptsError::illegal_spec(
                key.name(),
                SpecViolation::DuplicateOption {
                    option: identity.to_string(),
                    existing,
                },
            )
        })?;
        if !data.hidden {
            self.spec.has_opts = true;
        }
        binding.options.push(identity);
        Ok(())
    }

    fn compile_env_vars(&mut self, key: &Key, binding: &mut KeyBinding) -> Result<(), OptsError> {
        for entry in MetaArray::read(key, ENV).entries() {
            let name = entry.value();
            if name.is_empty() {
                continue;
            }
            if let Some(existing) = self.env_vars.get(name) {
                return Err(OptsError::illegal_spec(
                    key.name(),
                    SpecViolation::DuplicateEnvVar {
                        name: name.to_owned(),
                        existing: existing.to_string(),
                    },
                ));
            }
            self.env_vars.insert(name.to_owned(), key.name().clone());
            binding.env_vars.push(name.to_owned());
        }
        Ok(())
    }
}
