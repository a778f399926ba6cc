//! kioskctl - Raspberry Pi kiosk provisioner
//!
//! Turns a bare Raspbian install into a web-kiosk appliance over SSH:
//! packages, firewall, MOTD, Python tooling, Chromium autostart.

pub mod cli;
pub mod config;
pub mod error;
pub mod provision;
pub mod remote;
pub mod ui;

pub use error::{KioskError, KioskResult};
