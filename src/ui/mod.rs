//! Console output for provisioning runs
//!
//! Uses `cliclack` for the framed output and prompts in interactive
//! terminals, with automatic fallback to plain lines in CI and pipes.
//! Tasks print a green headline; each remote action under it prints a
//! single `→` substep line, at most once per run (see `provision::memo`).

mod context;
mod output;
mod progress;
mod prompts;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, note, outro_success, remark, step_ok, step_warn_hint, substep, task, task_warn,
};
pub use progress::TaskSpinner;
pub use prompts::confirm;
pub use theme::{init_theme, KioskTheme};
