//! Per-run memoization of idempotent remote actions
//!
//! Expensive setup steps (index refresh, package installs) are safe to
//! repeat but pointless to re-run within one invocation. Each guarded
//! action owns one record here; a record is only marked after the action
//! succeeds, so a failed step is retried by the next caller.

use crate::error::KioskResult;
use std::collections::HashSet;
use std::future::Future;

/// Guard for a single-shot action (e.g. the apt index refresh)
#[derive(Debug, Default)]
pub struct OnceRecord {
    done: bool,
}

impl OnceRecord {
    /// Run `action` unless it already succeeded this run.
    ///
    /// Returns whether the action was actually invoked. Errors propagate
    /// unmodified and leave the record clear.
    pub async fn run_once<F, Fut>(&mut self, action: F) -> KioskResult<bool>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = KioskResult<()>>,
    {
        if self.done {
            return Ok(false);
        }
        action().await?;
        self.done = true;
        Ok(true)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Guard for a parametrized action (e.g. "package X is installed")
#[derive(Debug, Default)]
pub struct KeyedRecord {
    seen: HashSet<String>,
}

impl KeyedRecord {
    /// Run `action` unless it already succeeded for `key` this run.
    ///
    /// Returns whether the action was actually invoked. Errors propagate
    /// unmodified and leave `key` unrecorded.
    pub async fn run_once<F, Fut>(&mut self, key: &str, action: F) -> KioskResult<bool>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = KioskResult<()>>,
    {
        if self.seen.contains(key) {
            return Ok(false);
        }
        action().await?;
        self.seen.insert(key.to_string());
        Ok(true)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }
}

/// All memoized actions of one provisioning run.
///
/// One independent record per action; there is no sharing or
/// cross-invalidation between them. Never persisted: a fresh run
/// re-attempts every step.
#[derive(Debug, Default)]
pub struct SessionMemo {
    /// apt-get update has run
    pub index: OnceRecord,
    /// apt packages already ensured
    pub packages: KeyedRecord,
    /// pip packages already installed
    pub pip: KeyedRecord,
}
