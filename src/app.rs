//! Application-facing contract: option registration, the entry point, and
//! the failure hooks.

use crate::error::Error;
use crate::registry::OptionSet;
use crate::status::Session;

/// A command line application.
///
/// Implementors declare their options in [`App::options`], describe the
/// positional arguments the entry point accepts in [`App::arguments`], and
/// put the program body in [`App::main`]. All other methods have defaults.
pub trait App {
    /// Register the application's option handlers. The set already contains
    /// the built-in options; registering the same logical name again
    /// replaces the built-in entry.
    fn options(set: &mut OptionSet<Self>) -> Result<(), Error>
    where
        Self: Sized,
    {
        let _ = set;
        Ok(())
    }

    /// Declared positional parameters of the entry point, used for the help
    /// syntax string and the arity check.
    fn arguments() -> ArgSpec
    where
        Self: Sized,
    {
        ArgSpec::default()
    }

    /// Introductory paragraph for verbose help.
    fn description() -> &'static str
    where
        Self: Sized,
    {
        ""
    }

    /// Text of the `ARGUMENTS:` block in verbose help.
    fn arguments_description() -> &'static str
    where
        Self: Sized,
    {
        ""
    }

    /// Text of the `EXAMPLES:` block in verbose help.
    fn examples_description() -> &'static str
    where
        Self: Sized,
    {
        ""
    }

    /// Called after tokenizing, before any option handler runs.
    fn before_options(&mut self, session: &mut Session) -> Result<(), Error> {
        let _ = session;
        Ok(())
    }

    /// Called after every option handler has run, before the entry point.
    fn after_options(&mut self, session: &mut Session) -> Result<(), Error> {
        let _ = session;
        Ok(())
    }

    /// The program body, invoked with the leftover positional arguments.
    /// The returned value becomes the process exit code.
    fn main(&mut self, session: &mut Session, args: &[String]) -> Result<i32, Error> {
        let _ = (session, args);
        Ok(0)
    }

    /// Interrupt hook: return `Some(code)` to claim the exit code. The
    /// default leaves the interrupt to the runner, which prints a
    /// cancellation notice and exits 1.
    fn handle_interrupt(&mut self) -> Option<i32> {
        None
    }

    /// Fault hook for any other error raised by a handler or the entry
    /// point. The default prints the full error chain and yields 1.
    fn handle_fault(&mut self, session: &mut Session, err: anyhow::Error) -> i32 {
        session.error(&format!("{err:?}"));
        1
    }
}

/// Declared positional parameters of an entry point: zero or more fixed
/// names plus an optional trailing variadic name.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    fixed: Vec<&'static str>,
    variadic: Option<&'static str>,
}

impl ArgSpec {
    /// An entry point taking no positional arguments.
    pub fn none() -> Self {
        Self {
            fixed: Vec::new(),
            variadic: None,
        }
    }

    /// Fixed parameters only; the argument count must match exactly.
    pub fn fixed(names: &[&'static str]) -> Self {
        Self {
            fixed: names.to_vec(),
            variadic: None,
        }
    }

    /// A single trailing variadic parameter.
    pub fn variadic(name: &'static str) -> Self {
        Self {
            fixed: Vec::new(),
            variadic: Some(name),
        }
    }

    /// Fixed leading parameters followed by a trailing variadic one.
    pub fn fixed_with_variadic(names: &[&'static str], rest: &'static str) -> Self {
        Self {
            fixed: names.to_vec(),
            variadic: Some(rest),
        }
    }

    /// Help syntax string, e.g. `arg1 args [args...]`.
    pub fn syntax(&self) -> String {
        let mut parts: Vec<String> = self.fixed.iter().map(ToString::to_string).collect();
        if let Some(rest) = self.variadic {
            parts.push(format!("{rest} [{rest}...]"));
        }
        parts.join(" ")
    }

    /// Number of required positional arguments.
    pub fn required(&self) -> usize {
        self.fixed.len()
    }

    pub fn has_variadic(&self) -> bool {
        self.variadic.is_some()
    }
}

impl Default for ArgSpec {
    /// Any number of positional arguments, shown as `args [args...]`.
    fn default() -> Self {
        Self::variadic("args")
    }
}
