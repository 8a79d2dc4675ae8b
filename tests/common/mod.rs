//! Shared fixtures for the integration tests: captured output streams and
//! argv construction.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use cmdapp::{App, Runner, Session};

/// Cloneable in-memory stream so tests can read what a run printed.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
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

pub struct Capture {
    pub out: SharedBuf,
    pub err: SharedBuf,
}

/// A runner with captured streams and a fixed invocation name.
pub fn captured_runner<A: App>(app: A, name: &str) -> (Runner<A>, Capture) {
    init_tracing();
    let out = SharedBuf::default();
    let err = SharedBuf::default();
    let session = Session::with_streams(Box::new(out.clone()), Box::new(err.clone()));
    let runner = Runner::new(app)
        .expect("option registration failed")
        .with_name(name)
        .with_session(session);
    (runner, Capture { out, err })
}

/// Split a readable command string into an argv vector.
pub fn argv(line: &str) -> Vec<String> {
    shell_words::split(line).expect("valid argv")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
