//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// kioskctl - Raspberry Pi kiosk provisioner
///
/// Provisions a bare Raspbian install into a web-kiosk appliance
/// over SSH: packages, firewall, MOTD, Chromium autostart.
#[derive(Parser, Debug)]
#[command(name = "kioskctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KIOSKCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Remote host to provision (overrides remote.host from config)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// Remote user (overrides remote.user from config)
    #[arg(short, long, global = true)]
    pub user: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the colour ASCII-art message of the day
    Motd,

    /// Install the base package set (htop, bmon, vim, ...)
    Packages,

    /// Install the kiosk package set (chromium, unclutter, ...)
    KioskPackages,

    /// Install global Python tooling and virtualenvwrapper
    Python,

    /// Install ufw and open ssh (plus an optional extra port)
    Firewall(FirewallArgs),

    /// Configure LXDE to autostart Chromium in kiosk mode
    Kiosk,

    /// Upgrade all installed packages
    Upgrade,

    /// Show uptime and disk usage of the Pi
    Status,

    /// Reboot the Pi
    Reboot(RebootArgs),

    /// Run the full provisioning sequence, ending in a reboot
    Deploy(DeployArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the firewall command
#[derive(Parser, Debug)]
pub struct FirewallArgs {
    /// Extra TCP port to open to everyone (ssh is always opened)
    pub port: Option<u16>,
}

/// Arguments for the reboot command
#[derive(Parser, Debug)]
pub struct RebootArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the deploy command
#[derive(Parser, Debug)]
pub struct DeployArgs {
    /// Skip the final reboot confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., remote.host)
        key: String,
        /// Value to set
        value: String,
    },
}
