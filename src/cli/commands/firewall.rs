//! Firewall command - install ufw and open ssh plus an optional port

use crate::cli::args::FirewallArgs;
use crate::error::KioskResult;
use crate::provision::{Context, Packages};
use crate::ui;

/// Execute the firewall command
pub async fn execute(ctx: &mut Context, args: FirewallArgs) -> KioskResult<()> {
    let Context { remote, memo, ui } = ctx;

    match args.port {
        Some(port) => ui::task(ui, &format!("Configuring firewall to allow all on port {}", port)),
        None => ui::task(ui, "Installing/configuring firewall"),
    }

    let mut packages = Packages::new(remote.as_ref(), memo, ui);
    packages.ensure("ufw").await?;
    drop(packages);

    let remote = remote.as_ref();
    remote.sudo("ufw allow proto tcp from any to any port 22").await?;
    if let Some(port) = args.port {
        remote
            .sudo(&format!("ufw allow proto tcp from any to any port {}", port))
            .await?;
    }
    remote.sudo("ufw --force enable").await?;

    ui::step_ok(ui, "Firewall enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::mock::MockRemote;
    use std::sync::Arc;

    #[tokio::test]
    async fn opens_ssh_and_enables() {
        let mock = Arc::new(MockRemote::new());
        let mut ctx = Context::with_remote(Box::new(mock.clone()));

        execute(&mut ctx, FirewallArgs { port: None }).await.unwrap();

        let issued = mock.issued();
        assert_eq!(issued.len(), 3);
        assert!(issued[0].command.contains("ufw"));
        assert_eq!(issued[1].command, "ufw allow proto tcp from any to any port 22");
        assert_eq!(issued[2].command, "ufw --force enable");
        assert!(issued.iter().all(|c| c.sudo));
    }

    #[tokio::test]
    async fn optional_port_adds_one_rule() {
        let mock = Arc::new(MockRemote::new());
        let mut ctx = Context::with_remote(Box::new(mock.clone()));

        execute(&mut ctx, FirewallArgs { port: Some(8080) }).await.unwrap();

        assert_eq!(
            mock.count_containing("ufw allow proto tcp from any to any port 8080"),
            1
        );
        // Enable still runs last
        let issued = mock.issued();
        assert_eq!(issued.last().unwrap().command, "ufw --force enable");
    }

    #[tokio::test]
    async fn ufw_install_memoized_across_calls() {
        let mock = Arc::new(MockRemote::new());
        let mut ctx = Context::with_remote(Box::new(mock.clone()));

        execute(&mut ctx, FirewallArgs { port: None }).await.unwrap();
        execute(&mut ctx, FirewallArgs { port: Some(443) }).await.unwrap();

        // The package check ran once; the rules and enable ran each time
        assert_eq!(mock.count_containing("apt-get -q -y install ufw"), 1);
        assert_eq!(mock.count_containing("ufw --force enable"), 2);
    }
}
