//! Remote command execution
//!
//! Provides a trait for running shell commands on the target machine,
//! implemented over the system `ssh` client. Everything the provisioner
//! does on the Pi goes through this narrow interface.

pub mod files;
#[cfg(test)]
pub mod mock;
pub mod ssh;

pub use ssh::SshRemote;

use crate::error::KioskResult;
use async_trait::async_trait;

/// Abstract remote shell interface
///
/// Both methods block until the command completes and fail on non-zero
/// exit or a lost connection. There is no retry layer on top.
#[async_trait]
pub trait Remote: Send + Sync {
    /// Run a command as the login user, returning stdout
    async fn run(&self, command: &str) -> KioskResult<String>;

    /// Run a command with the given string piped to its stdin
    async fn run_with_input(&self, command: &str, input: &str) -> KioskResult<String>;

    /// Run a command as root, returning stdout
    async fn sudo(&self, command: &str) -> KioskResult<String>;

    /// The `user@host` this remote talks to, for display
    fn target(&self) -> String;
}

/// Quote a string for safe interpolation into a remote shell command.
pub(crate) fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
