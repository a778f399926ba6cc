//! Reboot command - reboots. Yup.

use crate::cli::args::RebootArgs;
use crate::error::{KioskError, KioskResult};
use crate::provision::Context;
use crate::ui;

/// Execute the reboot command
pub async fn execute(ctx: &mut Context, args: RebootArgs) -> KioskResult<()> {
    let prompt_ctx = ctx.ui.clone().with_auto_yes(args.yes);
    let target = ctx.remote.target();

    if !ui::confirm(&prompt_ctx, &format!("Reboot {}?", target), true).await? {
        ui::remark(&ctx.ui, "Reboot skipped");
        return Ok(());
    }

    ui::task_warn(&ctx.ui, "Rebooting");
    match ctx.remote.sudo("reboot").await {
        Ok(_) => Ok(()),
        // The connection dropping is the reboot working
        Err(KioskError::ConnectionLost { .. }) => Ok(()),
        Err(e) => Err(e),
    }
}
