//! Option registration table: the base option set, override and alias
//! rules, and the switch-to-handler mapping used at dispatch time.

use std::collections::BTreeMap;

use crate::descriptor::OptionDescriptor;
use crate::error::Error;
use crate::help::HelpKind;
use crate::status::Session;
use crate::switches;

/// Opaque identity of a registered handler. Descriptors sharing a
/// `HandlerId` form one alias group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerId(pub(crate) usize);

pub(crate) type FlagFn<A> = Box<dyn Fn(&mut A, &mut Session) -> Result<(), Error>>;
pub(crate) type ValueFn<A> = Box<dyn Fn(&mut A, &mut Session, &str) -> Result<(), Error>>;
pub(crate) type VariadicFn<A> = Box<dyn Fn(&mut A, &mut Session, &[String]) -> Result<(), Error>>;

/// A registered handler, invoked by value at parse time.
pub(crate) enum Handler<A> {
    Flag(FlagFn<A>),
    Value(ValueFn<A>),
    Variadic(VariadicFn<A>),
}

/// The full option table for an application of type `A`.
///
/// Options are keyed by logical name; registering a name twice replaces the
/// earlier descriptor, which is how applications override built-ins.
/// Iteration order is alphabetical by name, giving deterministic switch
/// tables and help output regardless of registration order.
pub struct OptionSet<A> {
    options: BTreeMap<String, OptionDescriptor>,
    handlers: Vec<Handler<A>>,
}

impl<A> OptionSet<A> {
    pub fn new() -> Self {
        Self {
            options: BTreeMap::new(),
            handlers: Vec::new(),
        }
    }

    /// The base option set every application starts from: `-h`, `--help`,
    /// `-q`/`--quiet`, `-v`, and `--verbose=level`.
    pub fn with_builtins() -> Self {
        let mut set = Self::new();
        set.builtin_flag("h", "Displays abbreviated help message.", |_, session| {
            session.request_help(HelpKind::Simple);
            Ok(())
        });
        set.builtin_flag("help", "Displays verbose help message.", |_, session| {
            session.request_help(HelpKind::Verbose);
            Ok(())
        });
        set.builtin_flag("q", "Turn on quiet mode.", |_, session| {
            session.set_verbosity(0);
            Ok(())
        });
        set.builtin_alias("quiet", "q");
        set.builtin_flag(
            "v",
            "Increment the verbose level.\n\nHigher levels are more verbose. The default is 1.",
            |_, session| {
                session.increase_verbosity();
                Ok(())
            },
        );
        set.builtin_value(
            "verbose",
            "level",
            Some("1"),
            "Set the verbose level.",
            |_, session, value| {
                let level = value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| Error::Usage(format!("invalid verbose level: {value}")))?;
                session.set_verbosity(level);
                Ok(())
            },
        );
        set
    }

    /// Register an option taking no argument.
    pub fn flag<F>(&mut self, name: &str, help: &str, handler: F) -> Result<HandlerId, Error>
    where
        F: Fn(&mut A, &mut Session) -> Result<(), Error> + 'static,
    {
        let id = HandlerId(self.handlers.len());
        let desc = OptionDescriptor::new(name, None, false, None, help, id)?;
        self.handlers.push(Handler::Flag(Box::new(handler)));
        self.insert(desc);
        Ok(id)
    }

    /// Register an option taking one argument, with an optional declared
    /// default.
    pub fn value<F>(
        &mut self,
        name: &str,
        arg_name: &str,
        default: Option<&str>,
        help: &str,
        handler: F,
    ) -> Result<HandlerId, Error>
    where
        F: Fn(&mut A, &mut Session, &str) -> Result<(), Error> + 'static,
    {
        let id = HandlerId(self.handlers.len());
        let desc = OptionDescriptor::new(name, Some(arg_name), false, default, help, id)?;
        self.handlers.push(Handler::Value(Box::new(handler)));
        self.insert(desc);
        Ok(id)
    }

    /// Register an option whose value is split on the delimiter and passed
    /// to the handler as a list of one or more strings.
    pub fn variadic<F>(
        &mut self,
        name: &str,
        arg_name: &str,
        help: &str,
        handler: F,
    ) -> Result<HandlerId, Error>
    where
        F: Fn(&mut A, &mut Session, &[String]) -> Result<(), Error> + 'static,
    {
        let id = HandlerId(self.handlers.len());
        let desc = OptionDescriptor::new(name, Some(arg_name), true, None, help, id)?;
        self.handlers.push(Handler::Variadic(Box::new(handler)));
        self.insert(desc);
        Ok(id)
    }

    /// Register `name` as an alias of the already-registered option `of`:
    /// a separate switch-table entry routing to the same handler, grouped
    /// with it in help output.
    pub fn alias(&mut self, name: &str, of: &str) -> Result<HandlerId, Error> {
        let key = of.replace('-', "_");
        let source = self
            .options
            .get(&key)
            .ok_or_else(|| Error::UnknownOption(of.to_string()))?
            .clone();
        let desc = OptionDescriptor::new(
            name,
            source.arg_name(),
            source.is_variable(),
            source.default(),
            source.help_text(),
            source.handler(),
        )?;
        self.insert(desc);
        Ok(source.handler())
    }

    /// Descriptors in alphabetical order by logical name.
    pub fn descriptors(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.options.values()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Short-option spec string for the tokenizer, e.g. `hqv`.
    pub fn short_options_spec(&self) -> String {
        switches::short_spec(self.descriptors())
    }

    /// Long-option spec list for the tokenizer, e.g. `["help", "verbose="]`.
    pub fn long_options_spec(&self) -> Vec<String> {
        switches::long_spec(self.descriptors())
    }

    /// Resolve a switch as returned by the tokenizer (either hyphen or
    /// underscore spelling) to its descriptor.
    pub(crate) fn lookup(&self, switch: &str) -> Option<&OptionDescriptor> {
        let name = switch.trim_start_matches('-').replace('-', "_");
        self.options.get(&name)
    }

    pub(crate) fn handler(&self, id: HandlerId) -> &Handler<A> {
        &self.handlers[id.0]
    }

    fn insert(&mut self, desc: OptionDescriptor) {
        self.options.insert(desc.option_name().to_string(), desc);
    }

    fn builtin_flag<F>(&mut self, name: &str, help: &str, handler: F)
    where
        F: Fn(&mut A, &mut Session) -> Result<(), Error> + 'static,
    {
        let id = HandlerId(self.handlers.len());
        let desc = OptionDescriptor::builtin(name, None, false, None, help, id);
        self.handlers.push(Handler::Flag(Box::new(handler)));
        self.insert(desc);
    }

    fn builtin_value<F>(
        &mut self,
        name: &str,
        arg_name: &str,
        default: Option<&str>,
        help: &str,
        handler: F,
    ) where
        F: Fn(&mut A, &mut Session, &str) -> Result<(), Error> + 'static,
    {
        let id = HandlerId(self.handlers.len());
        let desc = OptionDescriptor::builtin(name, Some(arg_name), false, default, help, id);
        self.handlers.push(Handler::Value(Box::new(handler)));
        self.insert(desc);
    }

    fn builtin_alias(&mut self, name: &str, of: &str) {
        let source = self.options[of].clone();
        let desc = OptionDescriptor::builtin(
            name,
            source.arg_name(),
            source.is_variable(),
            source.default(),
            source.help_text(),
            source.handler(),
        );
        self.insert(desc);
    }
}

impl<A> Default for OptionSet<A> {
    fn default() -> Self {
        Self::new()
    }
}
