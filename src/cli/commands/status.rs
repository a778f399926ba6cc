//! Status command - general stats about the Pi

use crate::error::KioskResult;
use crate::provision::Context;
use crate::ui;
use console::style;

/// Execute the status command
pub async fn execute(ctx: &mut Context) -> KioskResult<()> {
    let remote = ctx.remote.as_ref();

    println!("{}", style(format!("{} status", remote.target())).bold().magenta());
    println!();

    let uptime = remote.run("uptime").await?;
    ui::note(&ctx.ui, "uptime", uptime.trim());

    let disk = remote.run("df -h").await?;
    ui::note(&ctx.ui, "disk usage", disk.trim());

    Ok(())
}
