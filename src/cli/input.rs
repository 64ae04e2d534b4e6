//! Input sources.
//!
//! Tokens come from exactly one place: positional arguments, a named file,
//! or standard input. Stdin is only read when it is redirected or when
//! blocking reads were requested with `-stdin`; an interactive terminal is
//! otherwise treated as empty input. Without `-stdin`, a pipe that stays
//! open but produces nothing within a short grace period is also empty.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{NumError, Result};

/// How long a non-blocking read waits for the first byte on stdin.
const STDIN_GRACE_MS: i32 = 250;

/// Where tokens are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Args(Vec<String>),
    File(PathBuf),
    /// `blocking` reads a terminal until end-of-stream
    Stdin { blocking: bool },
}

impl InputSource {
    /// Pick the source by priority: arguments, then file, then stdin.
    pub fn select(inputs: &[String], file: Option<&str>, blocking: bool) -> Self {
        if !inputs.is_empty() {
            InputSource::Args(inputs.to_vec())
        } else if let Some(path) = file {
            InputSource::File(PathBuf::from(path))
        } else {
            InputSource::Stdin { blocking }
        }
    }

    /// Open the source as a token stream.
    pub fn open(&self) -> Result<Tokens> {
        match self {
            InputSource::Args(args) => {
                debug!(count = args.len(), "reading tokens from arguments");
                Ok(Tokens::from_args(args.clone()))
            }
            InputSource::File(path) => {
                debug!(path = %path.display(), "reading tokens from file");
                let file = File::open(path).map_err(|source| NumError::Open {
                    path: path.display().to_string(),
                    source,
                })?;
                Ok(Tokens::from_reader(BufReader::new(file), path.display().to_string()))
            }
            InputSource::Stdin { blocking } => {
                let stdin = io::stdin();
                if stdin.is_terminal() && !blocking {
                    debug!("stdin is a terminal; not reading without -stdin");
                    return Ok(Tokens::from_args(Vec::new()));
                }
                if !blocking && !stdin_ready(STDIN_GRACE_MS) {
                    debug!("stdin produced no input; not reading without -stdin");
                    return Ok(Tokens::from_args(Vec::new()));
                }
                debug!(blocking, "reading tokens from stdin");
                Ok(Tokens::from_reader(stdin.lock(), "standard input".to_string()))
            }
        }
    }
}

/// Whether stdin has data or end-of-stream within `timeout_ms`.
#[cfg(unix)]
fn stdin_ready(timeout_ms: i32) -> bool {
    let mut fd = libc::pollfd {
        fd: libc::STDIN_FILENO,
        events: libc::POLLIN,
        revents: 0,
    };
    // SAFETY: `fd` is a single valid pollfd that outlives the call.
    let ret = unsafe { libc::poll(&mut fd, 1, timeout_ms) };
    match ret {
        0 => false,
        n if n > 0 => fd.revents & libc::POLLNVAL == 0,
        // interrupted or unsupported; fall back to reading
        _ => true,
    }
}

#[cfg(not(unix))]
fn stdin_ready(_timeout_ms: i32) -> bool {
    true
}

/// Whitespace-separated tokens, read one line at a time.
pub struct Tokens {
    reader: Option<Box<dyn BufRead>>,
    context: String,
    pending: std::vec::IntoIter<String>,
    buf: Vec<u8>,
}

impl Tokens {
    pub fn from_args(args: Vec<String>) -> Self {
        Tokens {
            reader: None,
            context: "arguments".to_string(),
            pending: args.into_iter(),
            buf: Vec::new(),
        }
    }

    pub fn from_reader<R: BufRead + 'static>(reader: R, context: String) -> Self {
        Tokens {
            reader: Some(Box::new(reader)),
            context,
            pending: Vec::new().into_iter(),
            buf: Vec::new(),
        }
    }

    /// Refill `pending` from the next non-blank line. Returns false at EOF.
    fn fill(&mut self) -> Result<bool> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(false);
        };
        loop {
            self.buf.clear();
            let n = reader.read_until(b'\n', &mut self.buf).map_err(|source| NumError::Read {
                context: self.context.clone(),
                source,
            })?;
            if n == 0 {
                self.reader = None;
                return Ok(false);
            }
            let line = String::from_utf8_lossy(&self.buf);
            let words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            if !words.is_empty() {
                self.pending = words.into_iter();
                return Ok(true);
            }
        }
    }
}

impl Iterator for Tokens {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }
            match self.fill() {
                Ok(true) => continue,
                Ok(false) => return None,
                Err(e) => {
                    self.reader = None;
                    return Some(Err(e));
                }
            }
        }
    }
}
