//! Configuration schema for kioskctl
//!
//! Configuration is stored at `~/.config/kioskctl/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The machine being provisioned
    pub remote: RemoteConfig,

    /// Kiosk browser settings
    pub kiosk: KioskConfig,

    /// Package sets installed by the provisioning tasks
    pub packages: PackagesConfig,
}

/// SSH target settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Hostname or address of the Pi
    pub host: String,

    /// Login user
    pub user: String,

    /// SSH port
    pub port: u16,

    /// Identity file to use instead of the agent/default keys
    pub identity: Option<PathBuf>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "rpi".to_string(),
            user: "pi".to_string(),
            port: 22,
            identity: None,
        }
    }
}

/// Kiosk browser settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    /// Page the kiosk shows on boot
    pub url: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            url: "http://www.page-to.display".to_string(),
        }
    }
}

/// Package sets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagesConfig {
    /// Base tools every Pi gets
    pub base: Vec<String>,

    /// Packages needed for the kiosk display
    pub kiosk: Vec<String>,

    /// Globally pip-installed Python tooling
    pub python: Vec<String>,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            base: vec![
                "htop".to_string(),
                "bmon".to_string(),
                "vim".to_string(),
                "python-pip".to_string(),
            ],
            kiosk: vec![
                "chromium".to_string(),
                "x11-xserver-utils".to_string(),
                "unclutter".to_string(),
            ],
            python: vec![
                "ipython".to_string(),
                "ipdb".to_string(),
                "virtualenv".to_string(),
                "virtualenvwrapper".to_string(),
            ],
        }
    }
}
