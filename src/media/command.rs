//! External command execution.

use std::process::{Command, Stdio};

/// Runs external programs and reports their output.
///
/// The metadata collectors only talk to the system through this trait, so
/// tests can substitute canned output.
pub trait CommandRunner {
    /// Trimmed stdout of a successful run, or `None` if the program could not
    /// be started or exited with a failure status.
    fn output(&self, program: &str, args: &[&str]) -> Option<String>;

    /// Whether the program ran and exited successfully.
    fn succeeds(&self, program: &str, args: &[&str]) -> bool;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn output(&self, program: &str, args: &[&str]) -> Option<String> {
        let output = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(o) => o,
            Err(e) => {
                log::debug!("Failed to run {}: {}", program, e);
                return None;
            }
        };

        if !output.status.success() {
            log::debug!(
                "{} {:?} exited with {}: {}",
                program,
                args,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn succeeds(&self, program: &str, args: &[&str]) -> bool {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}
