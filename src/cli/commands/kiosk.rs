//! Kiosk command - autostart Chromium in kiosk mode under LXDE
//!
//! Based on https://www.danpurdy.co.uk/web-development/raspberry-pi-kiosk-screen-tutorial/

use crate::config::Config;
use crate::error::KioskResult;
use crate::provision::Context;
use crate::remote::files;
use crate::ui;

const AUTOSTART: &str = "/etc/xdg/lxsession/LXDE/autostart";

/// xset lines that keep the display from blanking
const DISPLAY_LINES: [&str; 3] = ["@xset s off", "@xset -dpms", "@xset s noblank"];

/// Clears the crashed-session flag so Chromium never shows the restore bar
const CLEAN_EXIT_LINE: &str = r#"@sed -i 's/"exited_cleanly": false/"exited_cleanly": true/' ~/.config/chromium/Default/Preferences"#;

/// Execute the kiosk command
pub async fn execute(ctx: &mut Context, config: &Config) -> KioskResult<()> {
    ui::task(&ctx.ui, "Configuring kiosk autostart");
    let remote = ctx.remote.as_ref();

    ui::substep(&ctx.ui, "disabling screensaver and blanking");
    files::sudo_comment_line(remote, AUTOSTART, "@xscreensaver -no-splash").await?;
    for line in DISPLAY_LINES {
        files::sudo_append_line(remote, AUTOSTART, line).await?;
    }
    files::sudo_append_line(remote, AUTOSTART, CLEAN_EXIT_LINE).await?;

    ui::substep(&ctx.ui, &format!("pointing kiosk at {}", config.kiosk.url));
    let kiosk_line = format!(
        "@chromium --noerrdialogs --kiosk {} --incognito",
        config.kiosk.url
    );
    if !files::file_contains(remote, AUTOSTART, &kiosk_line).await? {
        files::sudo_append_line(remote, AUTOSTART, &kiosk_line).await?;
    }

    ui::step_ok(&ctx.ui, "Kiosk autostart configured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::mock::MockRemote;
    use std::sync::Arc;

    #[tokio::test]
    async fn edits_lxde_autostart() {
        let mock = Arc::new(MockRemote::new());
        let mut ctx = Context::with_remote(Box::new(mock.clone()));
        let config = Config::default();

        execute(&mut ctx, &config).await.unwrap();

        let issued = mock.issued();
        // comment + 3 xset appends + sed append + contains probe + kiosk append
        assert_eq!(issued.len(), 7);
        assert!(issued[0].command.starts_with("sed -i"));
        assert!(issued[0].sudo);
        assert_eq!(mock.count_containing("@xset s noblank"), 1);
        assert_eq!(
            mock.count_containing("@chromium --noerrdialogs --kiosk http://www.page-to.display --incognito"),
            2 // the probe and the guarded append
        );
    }

    #[tokio::test]
    async fn kiosk_line_not_duplicated() {
        let mock = Arc::new(MockRemote::new());
        let config = Config::default();
        let kiosk_line = format!(
            "@chromium --noerrdialogs --kiosk {} --incognito",
            config.kiosk.url
        );
        mock.reply(
            &format!(
                "grep -qxF -- '{}' '{}' 2>/dev/null && echo found || true",
                kiosk_line, AUTOSTART
            ),
            "found\n",
        );
        let mut ctx = Context::with_remote(Box::new(mock.clone()));

        execute(&mut ctx, &config).await.unwrap();

        // The probe found the line, so no append for it was issued
        let appends = mock
            .issued()
            .iter()
            .filter(|c| c.command.contains("--incognito") && c.command.contains(">>"))
            .count();
        assert_eq!(appends, 0);
    }

    #[tokio::test]
    async fn kiosk_url_comes_from_config() {
        let mock = Arc::new(MockRemote::new());
        let mut ctx = Context::with_remote(Box::new(mock.clone()));
        let mut config = Config::default();
        config.kiosk.url = "http://dashboard.local:3000".to_string();

        execute(&mut ctx, &config).await.unwrap();

        assert!(mock.count_containing("--kiosk http://dashboard.local:3000 --incognito") >= 1);
    }
}
