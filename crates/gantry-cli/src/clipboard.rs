use std::io::Write;
use std::process::{Child, Command, Stdio};

use gantry_core::error::CoreError;
use gantry_core::export::Clipboard;
use tracing::debug;

#[cfg(target_os = "macos")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const COPY_COMMANDS: &[(&str, &[&str])] = &[];

/// The desktop clipboard, reached through the platform's copy tool.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CoreError> {
        let mut last_error = "Clipboard copy not supported on this OS".to_string();
        for &(program, args) in COPY_COMMANDS {
            match CopyTarget::spawn(program, args).and_then(|target| target.copy(text)) {
                Ok(()) => {
                    debug!(program, "copied to clipboard");
                    return Ok(());
                }
                Err(e) => {
                    debug!(program, error = %e, "clipboard tool failed");
                    last_error = e;
                }
            }
        }
        Err(CoreError::Clipboard(last_error))
    }
}

/// Writes to stdout instead of the clipboard.
#[derive(Debug, Default)]
pub struct PrintClipboard;

impl Clipboard for PrintClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CoreError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        Ok(())
    }
}

/// A running copy tool. Killed and reaped on drop unless it exited cleanly.
struct CopyTarget {
    program: &'static str,
    child: Child,
    reaped: bool,
}

impl CopyTarget {
    fn spawn(program: &'static str, args: &[&str]) -> Result<Self, String> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("Failed to start {}: {}", program, e))?;
        Ok(Self {
            program,
            child,
            reaped: false,
        })
    }

    fn copy(mut self, text: &str) -> Result<(), String> {
        {
            let mut stdin = self
                .child
                .stdin
                .take()
                .ok_or_else(|| format!("{} has no stdin", self.program))?;
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| format!("Failed to write to {}: {}", self.program, e))?;
        }

        let status = self
            .child
            .wait()
            .map_err(|e| format!("{} wait failed: {}", self.program, e))?;
        self.reaped = true;

        if status.success() {
            Ok(())
        } else {
            Err(format!("{} failed with {}", self.program, status))
        }
    }
}

impl Drop for CopyTarget {
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
