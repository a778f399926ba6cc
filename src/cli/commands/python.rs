//! Python command - global Python tooling and virtualenvwrapper

use crate::config::Config;
use crate::error::KioskResult;
use crate::provision::{Context, Packages};
use crate::remote::files;
use crate::ui;

const WORKON_LINE: &str = "export WORKON_HOME=~/.virtualenvs";
const WRAPPER_LINE: &str = ". $(which virtualenvwrapper.sh)";

/// Execute the python command
pub async fn execute(ctx: &mut Context, config: &Config) -> KioskResult<()> {
    let Context { remote, memo, ui } = ctx;
    ui::task(ui, "Setting up global python environment");

    let mut packages = Packages::new(remote.as_ref(), memo, ui);
    for package in &config.packages.python {
        packages.pip_install(package).await?;
    }
    drop(packages);

    ui::substep(ui, "adding virtualenvwrapper to .bashrc");
    files::append_line(remote.as_ref(), ".bashrc", WORKON_LINE).await?;
    files::append_line(remote.as_ref(), ".bashrc", WRAPPER_LINE).await?;

    Ok(())
}
