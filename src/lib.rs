//! Base framework for building command line applications from declared
//! option handlers.
//!
//! An application implements [`App`], registers handlers in an
//! [`OptionSet`], and hands itself to a [`Runner`]: the runner builds the
//! getopt switch tables, dispatches parsed options to their handlers in
//! encounter order, renders `-h`/`--help` text from the same metadata, and
//! finally invokes the entry point with the leftover positional arguments.
//!
//! ```
//! use cmdapp::{App, ArgSpec, Error, OptionSet, Runner, Session};
//!
//! #[derive(Default)]
//! struct Concat {
//!     separator: String,
//! }
//!
//! impl App for Concat {
//!     fn options(set: &mut OptionSet<Self>) -> Result<(), Error> {
//!         set.value("separator", "char", None, "Separator between inputs.", |app, _, v| {
//!             app.separator = v.to_string();
//!             Ok(())
//!         })?;
//!         set.alias("s", "separator")?;
//!         Ok(())
//!     }
//!
//!     fn arguments() -> ArgSpec {
//!         ArgSpec::variadic("file")
//!     }
//!
//!     fn main(&mut self, session: &mut Session, args: &[String]) -> Result<i32, Error> {
//!         session.status(&args.join(self.separator.as_str()), 1);
//!         Ok(0)
//!     }
//! }
//!
//! let mut runner = Runner::new(Concat::default()).unwrap().with_name("concat");
//! let args: Vec<String> = vec!["-s".into(), ":".into(), "a".into(), "b".into()];
//! assert_eq!(runner.exec(&args), 0);
//! ```

pub mod app;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod registry;
pub mod status;
mod switches;
pub mod tokenizer;

pub use app::{App, ArgSpec};
pub use descriptor::OptionDescriptor;
pub use dispatch::Runner;
pub use error::Error;
pub use help::HelpKind;
pub use registry::{HandlerId, OptionSet};
pub use status::Session;
