// SPDX-License-Identifier: MPL-2.0
//! Opens web links with the platform's default handler.

use crate::error::{Error, Result};
use std::process::{Command, Stdio};

/// Returns true for URLs we are willing to hand to the system opener.
#[must_use]
pub fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn opener_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(url);
        cmd
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Opens `url` in the default browser without blocking the UI thread.
///
/// # Errors
///
/// Returns [`Error::Io`] if `url` is not an http(s) link or the opener
/// cannot be spawned.
pub fn open_url(url: &str) -> Result<()> {
    if !is_web_url(url) {
        return Err(Error::Io(format!("refusing to open non-web URL: {url}")));
    }

    let mut child = opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Reap the child in a background thread to avoid zombie processes.
    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}
