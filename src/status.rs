//! Per-run session state: verbosity-gated status output and help requests.
//!
//! Output is best-effort: a failing or closed stream degrades silently
//! instead of aborting the run.

use std::io::{self, Write};

use crate::help::HelpKind;

/// Mutable run state shared with option handlers and the entry point.
///
/// Holds the verbosity level, the output and error streams, and the
/// skip-main flag set by the built-in help options. Streams are injectable
/// for embedding and tests.
pub struct Session {
    verbosity: u32,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    help_requested: Option<HelpKind>,
    pending_help: Option<HelpKind>,
}

impl Session {
    /// Session writing to the process standard streams.
    pub fn new() -> Self {
        Self::with_streams(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn with_streams(out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            verbosity: 1,
            out,
            err,
            help_requested: None,
            pending_help: None,
        }
    }

    pub fn verbosity(&self) -> u32 {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, level: u32) {
        self.verbosity = level;
    }

    pub fn increase_verbosity(&mut self) {
        self.verbosity = self.verbosity.saturating_add(1);
    }

    /// Print `msg` with a trailing newline when the current verbosity is at
    /// least `level`.
    pub fn status(&mut self, msg: &str, level: u32) {
        self.emit(msg, level, false, true);
    }

    /// Like [`Session::status`] but without the trailing newline.
    pub fn status_no_newline(&mut self, msg: &str, level: u32) {
        self.emit(msg, level, false, false);
    }

    /// Print `msg` as an error on the error stream, regardless of verbosity.
    pub fn error(&mut self, msg: &str) {
        let text = format!("ERROR: {msg}");
        self.emit(&text, 0, true, true);
    }

    fn emit(&mut self, msg: &str, level: u32, to_err: bool, newline: bool) {
        if self.verbosity < level {
            return;
        }
        let stream = if to_err { &mut self.err } else { &mut self.out };
        let _ = stream.write_all(msg.as_bytes());
        if newline {
            let _ = stream.write_all(b"\n");
        }
        let _ = stream.flush();
    }

    /// Mark help as requested; the dispatcher renders it and skips the entry
    /// point.
    pub fn request_help(&mut self, kind: HelpKind) {
        self.help_requested = Some(kind);
        self.pending_help = Some(kind);
    }

    pub fn help_requested(&self) -> bool {
        self.help_requested.is_some()
    }

    pub(crate) fn take_pending_help(&mut self) -> Option<HelpKind> {
        self.pending_help.take()
    }

    pub(crate) fn reset(&mut self) {
        self.help_requested = None;
        self.pending_help = None;
    }

    pub(crate) fn print_out(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }

    pub(crate) fn print_err(&mut self, text: &str) {
        let _ = self.err.write_all(text.as_bytes());
        let _ = self.err.flush();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured() -> (Session, SharedBuf, SharedBuf) {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        let session = Session::with_streams(Box::new(out.clone()), Box::new(err.clone()));
        (session, out, err)
    }

    #[test]
    fn status_respects_verbosity_threshold() {
        let (mut session, out, _err) = captured();
        session.status("hidden", 2);
        assert_eq!(out.contents(), "");

        session.set_verbosity(2);
        session.status("shown", 2);
        assert_eq!(out.contents(), "shown\n");
    }

    #[test]
    fn status_no_newline_suppresses_trailing_newline() {
        let (mut session, out, _err) = captured();
        session.status_no_newline("partial", 1);
        assert_eq!(out.contents(), "partial");
    }

    #[test]
    fn error_goes_to_error_stream_even_when_quiet() {
        let (mut session, out, err) = captured();
        session.set_verbosity(0);
        session.error("broken");
        assert_eq!(out.contents(), "");
        assert_eq!(err.contents(), "ERROR: broken\n");
    }

    #[test]
    fn help_request_is_sticky_until_reset() {
        let (mut session, _out, _err) = captured();
        session.request_help(HelpKind::Simple);
        assert_eq!(session.take_pending_help(), Some(HelpKind::Simple));
        assert_eq!(session.take_pending_help(), None);
        assert!(session.help_requested());

        session.reset();
        assert!(!session.help_requested());
    }
}
