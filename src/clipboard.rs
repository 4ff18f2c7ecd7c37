//! Copying the snippet: try a primary writer, fall back to a secondary one.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::ClipboardError;

/// Something that can put text on a clipboard (or an equivalent sink).
pub trait ClipboardWriter {
    fn name(&self) -> &str;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

#[derive(Debug)]
pub enum CopyOutcome {
    /// Nothing to copy.
    Skipped,
    Copied { via: CopyPath },
    Failed {
        primary: ClipboardError,
        fallback: ClipboardError,
    },
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }
}

/// Copy `text` with `primary`, and only if that fails, with `fallback`.
///
/// Callers give the same feedback for both successful paths.
pub fn copy_with_fallback(
    text: &str,
    primary: &mut dyn ClipboardWriter,
    fallback: &mut dyn ClipboardWriter,
) -> CopyOutcome {
    if text.is_empty() {
        return CopyOutcome::Skipped;
    }

    let primary_err = match primary.write_text(text) {
        Ok(()) => {
            tracing::debug!(writer = primary.name(), "copied snippet");
            return CopyOutcome::Copied { via: CopyPath::Primary };
        }
        Err(e) => e,
    };
    tracing::warn!(writer = primary.name(), error = %primary_err, "primary copy failed, trying fallback");

    match fallback.write_text(text) {
        Ok(()) => {
            tracing::debug!(writer = fallback.name(), "copied snippet via fallback");
            CopyOutcome::Copied { via: CopyPath::Fallback }
        }
        Err(fallback_err) => {
            tracing::warn!(writer = fallback.name(), error = %fallback_err, "fallback copy failed");
            CopyOutcome::Failed {
                primary: primary_err,
                fallback: fallback_err,
            }
        }
    }
}

/// Pipes text into the platform clipboard tool.
///
/// Candidates are tried in order until one exits successfully. A tool that
/// fails to spawn or exits non-zero moves on to the next.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    candidates: Vec<(String, Vec<String>)>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        let candidates = if cfg!(target_os = "macos") {
            vec![candidate("pbcopy", &[])]
        } else if cfg!(windows) {
            vec![candidate("clip", &[])]
        } else {
            vec![
                candidate("wl-copy", &[]),
                candidate("xclip", &["-selection", "clipboard"]),
                candidate("xsel", &["--clipboard", "--input"]),
            ]
        };
        Self { candidates }
    }
}

fn candidate(program: &str, args: &[&str]) -> (String, Vec<String>) {
    (program.to_string(), args.iter().map(|a| a.to_string()).collect())
}

impl SystemClipboard {
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            candidates: vec![candidate(program, args)],
        }
    }

    fn pipe_into(program: &str, args: &[String], text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        // stdin must be dropped before waiting so the tool sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        written?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Unavailable(format!("{program} exited with {status}")))
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_err = None;
        for (program, args) in &self.candidates {
            match Self::pipe_into(program, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!(program = %program, error = %e, "clipboard tool failed");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| ClipboardError::Unavailable("no clipboard tool".into())))
    }
}

/// Writes the text to a file so it can be copied by hand.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: Option<PathBuf>,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }
}

impl ClipboardWriter for FileClipboard {
    fn name(&self) -> &str {
        "file"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| ClipboardError::Unavailable("no fallback file given".into()))?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording {
        fail: bool,
        written: Vec<String>,
    }

    impl ClipboardWriter for Recording {
        fn name(&self) -> &str {
            "recording"
        }

        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("test".into()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn primary_success_skips_fallback() {
        let mut primary = Recording::default();
        let mut fallback = Recording::default();
        let outcome = copy_with_fallback("css", &mut primary, &mut fallback);
        assert!(matches!(outcome, CopyOutcome::Copied { via: CopyPath::Primary }));
        assert_eq!(primary.written, vec!["css"]);
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn falls_back_on_primary_failure() {
        let mut primary = Recording { fail: true, ..Default::default() };
        let mut fallback = Recording::default();
        let outcome = copy_with_fallback("css", &mut primary, &mut fallback);
        assert!(matches!(outcome, CopyOutcome::Copied { via: CopyPath::Fallback }));
        assert_eq!(fallback.written, vec!["css"]);
    }

    #[test]
    fn reports_both_failures() {
        let mut primary = Recording { fail: true, ..Default::default() };
        let mut fallback = FileClipboard::disabled();
        let outcome = copy_with_fallback("css", &mut primary, &mut fallback);
        assert!(!outcome.is_success());
        assert!(matches!(outcome, CopyOutcome::Failed { .. }));
    }

    #[test]
    fn empty_text_is_skipped() {
        let mut primary = Recording::default();
        let mut fallback = Recording::default();
        let outcome = copy_with_fallback("", &mut primary, &mut fallback);
        assert!(matches!(outcome, CopyOutcome::Skipped));
        assert!(primary.written.is_empty());
    }

    #[test]
    fn missing_program_falls_back_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippet.css");
        let mut primary = SystemClipboard::with_command("neumorph-no-such-clipboard-tool", &[]);
        let mut fallback = FileClipboard::new(&path);

        let outcome = copy_with_fallback(".x{}", &mut primary, &mut fallback);
        assert!(matches!(outcome, CopyOutcome::Copied { via: CopyPath::Fallback }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ".x{}");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_moves_to_next_candidate() {
        let mut clipboard = SystemClipboard {
            candidates: vec![candidate("false", &[]), candidate("cat", &[])],
        };
        assert!(clipboard.write_text(".x{}").is_ok());

        let mut failing = SystemClipboard {
            candidates: vec![candidate("false", &[])],
        };
        assert!(failing.write_text(".x{}").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn closed_stdin_is_an_error() {
        // larger than a pipe buffer, so the write outlives `true`
        let text = "a".repeat(1 << 20);
        let mut clipboard = SystemClipboard::with_command("true", &[]);
        assert!(matches!(clipboard.write_text(&text), Err(ClipboardError::Io(_))));
    }
}
