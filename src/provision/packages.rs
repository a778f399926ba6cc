//! Memoized package operations on the remote
//!
//! Wraps apt-get and pip with the session memo so each install or index
//! refresh runs (and reports) at most once per invocation. Repeat calls
//! within one run are skipped silently.

use crate::error::KioskResult;
use crate::provision::memo::SessionMemo;
use crate::remote::Remote;
use crate::ui::{self, UiContext};

/// Installed before the first `pip install` of a run
const PIP_BOOTSTRAP: &str = "python-pip";

/// Package operations bound to one remote and one session memo
pub struct Packages<'a> {
    remote: &'a dyn Remote,
    memo: &'a mut SessionMemo,
    ui: &'a UiContext,
}

impl<'a> Packages<'a> {
    pub fn new(remote: &'a dyn Remote, memo: &'a mut SessionMemo, ui: &'a UiContext) -> Self {
        Self { remote, memo, ui }
    }

    /// Refresh the apt package index, at most once per run.
    pub async fn update(&mut self) -> KioskResult<()> {
        let remote = self.remote;
        let ui = self.ui;
        self.memo
            .index
            .run_once(move || async move {
                ui::substep(ui, "updating package index");
                remote.sudo("apt-get -q -y update").await?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Install a package if it is missing, at most once per run per package.
    pub async fn ensure(&mut self, package: &str) -> KioskResult<()> {
        let remote = self.remote;
        let ui = self.ui;
        self.memo
            .packages
            .run_once(package, move || async move {
                ui::substep(ui, &format!("checking {}", package));
                remote
                    .sudo(&format!(
                        "dpkg -s {p} >/dev/null 2>&1 || apt-get -q -y install {p}",
                        p = package
                    ))
                    .await?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Upgrade every installed package. Not memoized: upgrading twice is
    /// slow but not wrong, and the operator asked for it.
    pub async fn upgrade(&mut self) -> KioskResult<()> {
        self.remote
            .sudo("DEBIAN_FRONTEND=noninteractive apt-get -q -y dist-upgrade")
            .await?;
        Ok(())
    }

    /// Drop obsolete packages from the local archive cache.
    pub async fn clean(&mut self) -> KioskResult<()> {
        self.remote.sudo("apt-get -q -y autoclean").await?;
        Ok(())
    }

    /// Globally pip-install a package, at most once per run per package.
    /// Bootstraps pip itself through apt first.
    pub async fn pip_install(&mut self, package: &str) -> KioskResult<()> {
        self.ensure(PIP_BOOTSTRAP).await?;

        let remote = self.remote;
        let ui = self.ui;
        self.memo
            .pip
            .run_once(package, move || async move {
                ui::substep(ui, &format!("checking {}", package));
                remote.sudo(&format!("pip install {}", package)).await?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}
