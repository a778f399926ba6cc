//! Deploy command - the full provisioning sequence
//!
//! Installs pretty much everything to a bare Pi, in a fixed order,
//! sharing one session memo so the package index is refreshed once.

use crate::cli::args::{DeployArgs, RebootArgs};
use crate::config::Config;
use crate::error::KioskResult;
use crate::provision::Context;
use crate::ui;

use super::{kiosk, kiosk_packages, motd, packages, python, reboot, upgrade};

/// Execute the deploy command
pub async fn execute(ctx: &mut Context, config: &Config, args: DeployArgs) -> KioskResult<()> {
    ui::intro(&ctx.ui, "Starting deployment");

    upgrade::execute(ctx).await?;
    packages::execute(ctx, config).await?;
    kiosk_packages::execute(ctx, config).await?;
    python::execute(ctx, config).await?;
    kiosk::execute(ctx, config).await?;
    motd::execute(ctx).await?;

    ui::outro_success(&ctx.ui, "Deployment complete");
    reboot::execute(ctx, RebootArgs { yes: args.yes }).await
}
