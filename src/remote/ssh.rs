//! Remote execution over the system `ssh` client
//!
//! Shells out to `ssh` rather than linking an SSH library, so the user's
//! existing config, known_hosts and agent all apply unchanged.

use crate::config::RemoteConfig;
use crate::error::{KioskError, KioskResult};
use crate::remote::{shell_quote, Remote};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// ssh exits with 255 on its own errors (lost connection, auth failure);
/// anything else is the remote command's exit code.
const SSH_TRANSPORT_ERROR: i32 = 255;

/// Remote executor backed by the OpenSSH client
pub struct SshRemote {
    user: String,
    host: String,
    port: u16,
    identity: Option<PathBuf>,
}

impl SshRemote {
    /// Build a remote from the `[remote]` config section
    pub fn from_config(config: &RemoteConfig) -> KioskResult<Self> {
        if config.host.is_empty() {
            return Err(KioskError::HostNotConfigured);
        }
        Ok(Self {
            user: config.user.clone(),
            host: config.host.clone(),
            port: config.port,
            identity: config.identity.clone(),
        })
    }

    /// Argument vector for one ssh invocation of `command`
    fn ssh_args(&self, command: &str) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "ConnectTimeout=10".to_string(),
            "-p".to_string(),
            self.port.to_string(),
        ];
        if let Some(ref identity) = self.identity {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }
        args.push(self.target());
        args.push("--".to_string());
        args.push(command.to_string());
        args
    }

    /// Wrap a command so it runs as root on the remote.
    ///
    /// `-n` fails instead of hanging on a password prompt; the Pi's
    /// default user has passwordless sudo.
    fn sudo_wrap(command: &str) -> String {
        format!("sudo -n sh -c {}", shell_quote(command))
    }

    async fn exec(&self, command: &str, input: Option<&str>) -> KioskResult<String> {
        debug!("ssh {}: {}", self.target(), command);

        let mut child = Command::new("ssh")
            .args(self.ssh_args(command))
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| KioskError::SshSpawn {
                command: command.to_string(),
                source: e,
            })?;

        if let Some(input) = input {
            let mut stdin = child.stdin.take().expect("stdin was piped");
            stdin
                .write_all(input.as_bytes())
                .await
                .map_err(|e| KioskError::io("writing to remote stdin", e))?;
            drop(stdin);
        }

        let output = child.wait_with_output().await.map_err(|e| KioskError::SshSpawn {
            command: command.to_string(),
            source: e,
        })?;

        match output.status.code() {
            Some(0) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
            Some(SSH_TRANSPORT_ERROR) | None => {
                debug!("ssh transport failure: {}", String::from_utf8_lossy(&output.stderr));
                Err(KioskError::ConnectionLost {
                    target: self.target(),
                })
            }
            Some(code) => Err(KioskError::remote(
                command,
                code,
                String::from_utf8_lossy(&output.stderr).into_owned(),
            )),
        }
    }
}

#[async_trait]
impl Remote for SshRemote {
    async fn run(&self, command: &str) -> KioskResult<String> {
        self.exec(command, None).await
    }

    async fn run_with_input(&self, command: &str, input: &str) -> KioskResult<String> {
        self.exec(command, Some(input)).await
    }

    async fn sudo(&self, command: &str) -> KioskResult<String> {
        self.exec(&Self::sudo_wrap(command), None).await
    }

    fn target(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}
