//! Upgrade command - dist-upgrade everything installed

use crate::error::KioskResult;
use crate::provision::{Context, Packages};
use crate::ui::{self, TaskSpinner};

/// Execute the upgrade command
pub async fn execute(ctx: &mut Context) -> KioskResult<()> {
    let Context { remote, memo, ui } = ctx;
    ui::task(ui, "Upgrading packages");

    let mut packages = Packages::new(remote.as_ref(), memo, ui);
    packages.update().await?;

    let mut spinner = TaskSpinner::new(ui);
    spinner.start("Upgrading all packages (this can take a while)");
    match packages.upgrade().await {
        Ok(()) => spinner.stop("All packages upgraded"),
        Err(e) => {
            spinner.stop_error("Upgrade failed");
            return Err(e);
        }
    }

    packages.clean().await?;
    Ok(())
}
