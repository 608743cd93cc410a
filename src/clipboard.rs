//! System clipboard integration
//!
//! Copies text by piping it into the platform clipboard utility:
//! `pbcopy` on macOS, `clip` on Windows, and `wl-copy`/`xclip`/`xsel` on
//! other unixes (first available wins). Callers treat failure as a
//! warning, never a fatal error.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Context;

/// Copy text to the system clipboard
pub fn copy(text: &str) -> anyhow::Result<()> {
    let mut last_err = None;

    for (program, args) in candidates() {
        match pipe_to(program, args, text) {
            Ok(()) => {
                log::debug!("copied {} byte(s) via {program}", text.len());
                return Ok(());
            },
            Err(err) => last_err = Some(err),
        }
    }

    Err(last_err.unwrap_or_else(|| anyhow::anyhow!("no clipboard utility available")))
}

/// Clipboard utilities to try, in order, for the current platform
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        vec![("pbcopy", &[][..])]
    } else if cfg!(target_os = "windows") {
        vec![("clip", &[][..])]
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        vec![
            ("wl-copy", &[][..]),
            ("xclip", &["-selection", "clipboard"][..]),
            ("xsel", &["--clipboard", "--input"][..]),
        ]
    } else {
        vec![
            ("xclip", &["-selection", "clipboard"][..]),
            ("xsel", &["--clipboard", "--input"][..]),
        ]
    }
}

/// Spawn a utility and write the text to its stdin
fn pipe_to(program: &str, args: &[&str], text: &str) -> anyhow::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("could not run {program}"))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes()).with_context(|| format!("could not write to {program}"))?;
    }

    let status = child.wait().with_context(|| format!("{program} did not run to completion"))?;
    if !status.success() {
        anyhow::bail!("{program} exited with {status}");
    }
    Ok(())
}
