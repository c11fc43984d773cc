//! Clipboard access from a terminal.
//!
//! The preferred path writes an OSC 52 escape sequence so the terminal
//! emulator sets the system clipboard. Without a capable terminal the text is
//! piped into a platform copy command instead.

use std::env;
use std::io::{IsTerminal, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use randhue::{Capabilities, Clipboard, ClipboardError, Selection};

/// A program that copies its standard input to the clipboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyCommand {
    program: &'static str,
    args: &'static [&'static str],
}

/// Known copy commands in order of preference.
const COPY_COMMANDS: &[CopyCommand] = &[
    CopyCommand { program: "pbcopy", args: &[] },
    CopyCommand { program: "wl-copy", args: &[] },
    CopyCommand { program: "xclip", args: &["-selection", "clipboard"] },
    CopyCommand { program: "xsel", args: &["--clipboard", "--input"] },
    CopyCommand { program: "clip.exe", args: &[] },
];

/// Format `text` as an OSC 52 clipboard write.
pub fn osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

fn on_path(program: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| {
            env::split_paths(&paths).any(|dir| Path::new(&dir).join(program).is_file())
        })
        .unwrap_or(false)
}

/// A clipboard backed by the controlling terminal.
#[derive(Debug)]
pub struct TerminalClipboard {
    terminal: bool,
    trusted: bool,
    command: Option<CopyCommand>,
}

impl TerminalClipboard {
    /// Inspect the environment once.
    pub fn detect(allow_osc52: bool) -> Self {
        let terminal = allow_osc52 && std::io::stdout().is_terminal();
        // `dumb` terminals pass escape sequences through as garbage.
        let trusted = env::var("TERM")
            .map(|term| !term.is_empty() && term != "dumb")
            .unwrap_or(false);
        let command = COPY_COMMANDS.iter().copied().find(|c| on_path(c.program));

        tracing::debug!(terminal, trusted, ?command, "detected clipboard");

        Self {
            terminal,
            trusted,
            command,
        }
    }
}

impl Clipboard for TerminalClipboard {
    fn capabilities(&self) -> Capabilities {
        let mut capabilities = Capabilities::empty();
        capabilities.set(Capabilities::CLIPBOARD_API, self.terminal);
        capabilities.set(Capabilities::SECURE_CONTEXT, self.trusted);
        capabilities.set(Capabilities::SELECTION_COPY, self.command.is_some());
        capabilities
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(osc52(text).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn open_selection(&mut self) -> Result<Box<dyn Selection + '_>, ClipboardError> {
        let command = self.command.ok_or(ClipboardError::Unavailable)?;
        let child = Command::new(command.program)
            .args(command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(Box::new(ProcessSelection {
            program: command.program,
            child,
        }))
    }
}

/// A running copy command. The process is reaped when this is dropped.
struct ProcessSelection {
    program: &'static str,
    child: Child,
}

impl Selection for ProcessSelection {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        {
            let mut stdin = self
                .child
                .stdin
                .take()
                .ok_or_else(|| ClipboardError::Backend(format!("{} has no stdin", self.program)))?;
            stdin.write_all(text.as_bytes())?;
        }

        let status = self.child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Backend(format!("{} exited with {status}", self.program)))
        }
    }
}

impl Drop for ProcessSelection {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
