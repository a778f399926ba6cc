//! Kiosk-packages command - install the display/browser package set

use crate::config::Config;
use crate::error::KioskResult;
use crate::provision::{Context, Packages};
use crate::ui;

/// Execute the kiosk-packages command
pub async fn execute(ctx: &mut Context, config: &Config) -> KioskResult<()> {
    let Context { remote, memo, ui } = ctx;
    ui::task(ui, "Installing kiosk packages");

    let mut packages = Packages::new(remote.as_ref(), memo, ui);
    packages.update().await?;
    for package in &config.packages.kiosk {
        packages.ensure(package).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::mock::MockRemote;
    use std::sync::Arc;

    #[tokio::test]
    async fn shares_index_refresh_with_base_packages() {
        let mock = Arc::new(MockRemote::new());
        let mut ctx = Context::with_remote(Box::new(mock.clone()));
        let config = Config::default();

        super::super::packages::execute(&mut ctx, &config).await.unwrap();
        execute(&mut ctx, &config).await.unwrap();

        // One update for both tasks; the kiosk set still installs
        assert_eq!(mock.count_containing("apt-get -q -y update"), 1);
        assert_eq!(mock.count_containing("chromium"), 1);
        assert_eq!(mock.count_containing("unclutter"), 1);
    }
}
