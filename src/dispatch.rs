//! The run loop: tokenize, apply option handlers in encounter order, then
//! invoke the entry point with the leftover positional arguments.

use std::path::Path;

use crate::app::{App, ArgSpec};
use crate::error::Error;
use crate::help::{self, HelpContext, HelpKind};
use crate::registry::{Handler, OptionSet};
use crate::status::Session;
use crate::tokenizer;

/// Variadic option values are split on this character unless reconfigured.
pub const DEFAULT_SPLIT_CHAR: char = ',';

/// Drives one application: owns the option table, the session, and the app
/// value, and turns a command line into an exit code.
///
/// [`Runner::exec`] returns the code for embedding and tests;
/// [`Runner::run`] reads the process arguments and exits with it.
pub struct Runner<A: App> {
    app: A,
    options: OptionSet<A>,
    session: Session,
    arguments: ArgSpec,
    app_name: String,
    version: Option<String>,
    split_char: char,
}

impl<A: App> Runner<A> {
    /// Build the option table (built-ins first, then the application's own
    /// registrations) and wrap `app` for dispatch.
    pub fn new(app: A) -> Result<Self, Error> {
        let mut options = OptionSet::with_builtins();
        A::options(&mut options)?;
        tracing::debug!(options = options.len(), "registered option table");
        Ok(Self {
            app,
            options,
            session: Session::new(),
            arguments: A::arguments(),
            app_name: default_app_name(),
            version: None,
            split_char: DEFAULT_SPLIT_CHAR,
        })
    }

    /// Override the invocation name shown in help (defaults to the basename
    /// of the process argument zero).
    pub fn with_name(mut self, name: &str) -> Self {
        self.app_name = name.to_string();
        self
    }

    /// Version string shown in the usage-error header.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Replace the session, e.g. to capture output in tests.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Delimiter used to split variadic option values.
    pub fn with_split_char(mut self, split_char: char) -> Self {
        self.split_char = split_char;
        self
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn simple_help_string(&self) -> String {
        help::simple_help(&self.options, &self.context())
    }

    pub fn verbose_help_string(&self) -> String {
        help::verbose_help(&self.options, &self.context())
    }

    /// Parse the process arguments, dispatch, and exit with the resolved
    /// code.
    pub fn run(mut self) -> ! {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let code = self.exec(&args);
        std::process::exit(code);
    }

    /// Dispatch one command line and return the exit code instead of
    /// exiting, for embedding and tests.
    pub fn exec(&mut self, args: &[String]) -> i32 {
        self.session.reset();
        match self.dispatch(args) {
            Ok(code) => code,
            Err(Error::Interrupted) => match self.app.handle_interrupt() {
                Some(code) => code,
                None => {
                    self.session.print_err("Cancelled by user.\n");
                    1
                }
            },
            Err(Error::Exit(code)) => code,
            Err(Error::Usage(message)) => {
                let text = help::usage_error_help(&self.options, &self.context(), &message);
                self.session.print_err(&text);
                1
            }
            Err(Error::Fault(err)) => self.app.handle_fault(&mut self.session, err),
            Err(err) => self
                .app
                .handle_fault(&mut self.session, anyhow::Error::new(err)),
        }
    }

    fn dispatch(&mut self, args: &[String]) -> Result<i32, Error> {
        let short_spec = self.options.short_options_spec();
        let long_spec = self.options.long_options_spec();
        let parsed = tokenizer::tokenize(args, &short_spec, &long_spec)
            .map_err(|err| Error::Usage(err.to_string()))?;
        tracing::debug!(
            options = parsed.options.len(),
            positionals = parsed.positionals.len(),
            "tokenized command line"
        );

        self.app.before_options(&mut self.session)?;
        for (switch, value) in &parsed.options {
            self.apply_option(switch, value)?;
            if let Some(kind) = self.session.take_pending_help() {
                let text = match kind {
                    HelpKind::Simple => help::simple_help(&self.options, &self.context()),
                    HelpKind::Verbose => help::verbose_help(&self.options, &self.context()),
                };
                self.session.print_out(&text);
            }
        }
        self.app.after_options(&mut self.session)?;

        if self.session.help_requested() {
            return Ok(0);
        }

        let supplied = parsed.positionals.len();
        let required = self.arguments.required();
        if supplied < required {
            return Err(Error::Usage(format!(
                "not enough arguments: expected at least {required}, got {supplied}"
            )));
        }
        if !self.arguments.has_variadic() && supplied > required {
            return Err(Error::Usage(format!(
                "too many arguments: expected {required}, got {supplied}"
            )));
        }

        self.app.main(&mut self.session, &parsed.positionals)
    }

    fn apply_option(&mut self, switch: &str, value: &str) -> Result<(), Error> {
        let desc = self
            .options
            .lookup(switch)
            .ok_or_else(|| Error::Usage(format!("option {switch} not recognized")))?;
        tracing::debug!(switch, option = desc.option_name(), "applying option");
        let id = desc.handler();
        let default = desc.default().map(str::to_string);
        match self.options.handler(id) {
            Handler::Flag(handler) => handler(&mut self.app, &mut self.session)?,
            Handler::Value(handler) => {
                let raw = if value.is_empty() {
                    default.as_deref().unwrap_or(value)
                } else {
                    value
                };
                handler(&mut self.app, &mut self.session, raw)?;
            }
            Handler::Variadic(handler) => {
                let parts: Vec<String> = value.split(self.split_char).map(str::to_string).collect();
                handler(&mut self.app, &mut self.session, &parts)?;
            }
        }
        Ok(())
    }

    fn context(&self) -> HelpContext<'_> {
        HelpContext {
            app_name: &self.app_name,
            version: self.version.as_deref(),
            arguments: &self.arguments,
            description: A::description(),
            arguments_description: A::arguments_description(),
            examples_description: A::examples_description(),
        }
    }
}

fn default_app_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "app".to_string())
}
