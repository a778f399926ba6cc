//! Error types for kioskctl
//!
//! All modules use `KioskResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kioskctl operations
pub type KioskResult<T> = Result<T, KioskError>;

/// All errors that can occur in kioskctl
#[derive(Error, Debug)]
pub enum KioskError {
    // Remote execution errors
    #[error("No remote host configured")]
    HostNotConfigured,

    #[error("Failed to start ssh: {command}")]
    SshSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Remote command failed (exit {code}): {command}")]
    RemoteCommand {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Connection to {target} closed unexpectedly")]
    ConnectionLost { target: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl KioskError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a remote command error
    pub fn remote(command: impl Into<String>, code: i32, stderr: impl Into<String>) -> Self {
        Self::RemoteCommand {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::HostNotConfigured => {
                Some("Set it with: kioskctl config set remote.host <hostname>".to_string())
            }
            Self::SshSpawn { .. } => {
                Some("Is the OpenSSH client installed and on PATH?".to_string())
            }
            Self::RemoteCommand { stderr, .. } if stderr.contains("sudo:") => Some(
                "Passwordless sudo is required on the Pi (the default for the pi user)"
                    .to_string(),
            ),
            Self::ConnectionLost { target } => {
                Some(format!("Check that {} is reachable over ssh", target))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = KioskError::remote("apt-get update", 100, "");
        assert!(err.to_string().contains("apt-get update"));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn error_hint_host() {
        let err = KioskError::HostNotConfigured;
        assert!(err.hint().unwrap().contains("remote.host"));
    }

    #[test]
    fn error_hint_sudo() {
        let err = KioskError::remote("reboot", 1, "sudo: a password is required");
        assert!(err.hint().unwrap().contains("sudo"));

        let err = KioskError::remote("reboot", 1, "no such file");
        assert!(err.hint().is_none());
    }
}
