use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Platform share capabilities probed at runtime
pub trait SharePlatform {
    fn supports_native_share(&self) -> bool;
    fn native_share(&mut self, title: &str, text: &str, url: &str) -> Result<()>;
    fn open_url(&mut self, url: &str) -> Result<()>;
}

/// Share platform for a terminal session: no share sheet, links go to the system opener
#[derive(Debug, Default)]
pub struct TerminalPlatform;

impl TerminalPlatform {
    /// Command opening `url` on `os`. The URL is always a single argv entry and never
    /// passes through a shell, so `&` and `%` in intent links survive.
    fn open_command(os: &str, url: &str) -> Command {
        let mut command = match os {
            "macos" => Command::new("open"),
            "windows" => {
                let mut command = Command::new("rundll32");
                command.arg("url.dll,FileProtocolHandler");
                command
            }
            _ => Command::new("xdg-open"),
        };
        command.arg(url);
        command
    }
}

impl SharePlatform for TerminalPlatform {
    fn supports_native_share(&self) -> bool {
        false
    }

    fn native_share(&mut self, _title: &str, _text: &str, _url: &str) -> Result<()> {
        bail!("Native share is not available in a terminal")
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        let mut command = Self::open_command(std::env::consts::OS, url);
        let program = command.get_program().to_string_lossy().into_owned();
        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", program))?;
        if !status.success() {
            bail!("{} exited with {}", program, status);
        }
        Ok(())
    }
}
