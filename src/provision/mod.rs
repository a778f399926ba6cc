//! Provisioning state shared across tasks

pub mod memo;
pub mod packages;

pub use memo::SessionMemo;
pub use packages::Packages;

use crate::config::Config;
use crate::error::KioskResult;
use crate::remote::{Remote, SshRemote};
use crate::ui::UiContext;

/// Everything a provisioning task needs: the ssh target, the per-run
/// memo and the console context.
///
/// Created once per invocation and passed to every task, so a deploy
/// run shares a single memo across its whole sequence.
pub struct Context {
    pub remote: Box<dyn Remote>,
    pub memo: SessionMemo,
    pub ui: UiContext,
}

impl Context {
    pub fn new(config: &Config) -> KioskResult<Self> {
        Ok(Self {
            remote: Box::new(SshRemote::from_config(&config.remote)?),
            memo: SessionMemo::default(),
            ui: UiContext::detect(),
        })
    }

    /// Context over an arbitrary remote, for tests
    #[cfg(test)]
    pub fn with_remote(remote: Box<dyn Remote>) -> Self {
        Self {
            remote,
            memo: SessionMemo::default(),
            ui: UiContext::non_interactive(),
        }
    }
}
