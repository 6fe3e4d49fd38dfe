//! Clipboard publishing through an external helper.
//!
//! Only the Wayland `wl-copy` helper is supported. On any other session the
//! spawn or the helper itself fails, which callers surface as a warning
//! rather than an error.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, warn};

use crate::token::Token;

/// Default clipboard helper program.
pub const WL_COPY: &str = "wl-copy";

/// The clipboard helper could not place the text on the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited unsuccessfully ({status})")]
    Status { program: String, status: ExitStatus },
}

/// Something that can receive text for the system clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the `wl-copy` command line helper.
#[derive(Debug, Clone)]
pub struct WlCopy {
    program: String,
}

impl WlCopy {
    pub fn new() -> Self {
        Self::with_program(WL_COPY)
    }

    /// Use `program` in place of `wl-copy`. It receives the text as its only
    /// argument.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for WlCopy {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        debug!(program = %self.program, "spawning clipboard helper");
        let status = Command::new(&self.program)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(ClipboardError::Status {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Hand `token` to `clipboard`, logging the outcome.
pub fn publish<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    token: &Token,
) -> Result<(), ClipboardError> {
    match clipboard.set_text(token.as_str()) {
        Ok(()) => {
            debug!("token copied to clipboard");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "clipboard copy failed");
            Err(e)
        }
    }
}
