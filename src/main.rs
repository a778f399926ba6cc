//! kioskctl - Raspberry Pi kiosk provisioner
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use kioskctl::cli::{commands, Cli, Commands};
use kioskctl::config::ConfigManager;
use kioskctl::error::KioskResult;
use kioskctl::provision::Context;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> KioskResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info (each remote command), 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("kioskctl=warn"),
        1 => EnvFilter::new("kioskctl=info"),
        _ => EnvFilter::new("kioskctl=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    kioskctl::ui::init_theme();

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    let mut config = config_manager.load().await?;

    // Per-invocation target override
    if let Some(host) = cli.host {
        config.remote.host = host;
    }
    if let Some(user) = cli.user {
        config.remote.user = user;
    }

    // Config command never touches the remote
    if let Commands::Config(args) = cli.command {
        return commands::config(args, &config).await;
    }

    // Everything else runs over one ssh target with one per-run memo
    let mut ctx = Context::new(&config)?;

    match cli.command {
        Commands::Config(_) => unreachable!("Config handled above"),
        Commands::Motd => commands::motd(&mut ctx).await,
        Commands::Packages => commands::packages(&mut ctx, &config).await,
        Commands::KioskPackages => commands::kiosk_packages(&mut ctx, &config).await,
        Commands::Python => commands::python(&mut ctx, &config).await,
        Commands::Firewall(args) => commands::firewall(&mut ctx, args).await,
        Commands::Kiosk => commands::kiosk(&mut ctx, &config).await,
        Commands::Upgrade => commands::upgrade(&mut ctx).await,
        Commands::Status => commands::status(&mut ctx).await,
        Commands::Reboot(args) => commands::reboot(&mut ctx, args).await,
        Commands::Deploy(args) => commands::deploy(&mut ctx, &config, args).await,
    }
}
