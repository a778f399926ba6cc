//! Packages command - install the base package set

use crate::config::Config;
use crate::error::KioskResult;
use crate::provision::{Context, Packages};
use crate::ui;

/// Execute the packages command
pub async fn execute(ctx: &mut Context, config: &Config) -> KioskResult<()> {
    let Context { remote, memo, ui } = ctx;
    ui::task(ui, "Installing packages");

    let mut packages = Packages::new(remote.as_ref(), memo, ui);
    packages.update().await?;
    for package in &config.packages.base {
        packages.ensure(package).await?;
    }

    Ok(())
}
