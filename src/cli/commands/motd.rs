//! Motd command - install the colour ASCII-art MOTD

use crate::error::KioskResult;
use crate::provision::Context;
use crate::remote::files;
use crate::ui;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const ORANGE: &str = "\x1b[33m";
const PURPLE: &str = "\x1b[35m";
const RESET: &str = "\x1b[m";

/// Execute the motd command
pub async fn execute(ctx: &mut Context) -> KioskResult<()> {
    ui::task(&ctx.ui, "Installing succulent MOTD");
    files::write_file(ctx.remote.as_ref(), "/etc/motd", &banner()).await?;
    ui::step_ok(&ctx.ui, "MOTD installed");
    Ok(())
}

/// The raspberry is by RPi forum user b3n,
/// http://www.raspberrypi.org/phpBB3/viewtopic.php?f=2&t=5494
fn banner() -> String {
    format!(
        "\n\
{g}      .~~.   .~~.\n\
{g}     \". \\ \" \" / .\"\n\
{r}      .~ .~~~..~.\n\
{r}     : .~.\"~\".~. :    {b}                       __                      {o}     _\n\
{r}    ~ (   ) (   ) ~   {b}    _______ ____ ___  / /  ___ __________ __  {o}___  (_)\n\
{r}   ( : \"~\".~.\"~\" : )  {b}   / __/ _ `(_-</ _ \\/ _ \\/ -_) __/ __/ // / {o}/ _ \\/ /\n\
{r}    ~ .~ (   ) ~. ~   {p}  /_/  \\_,_/___/ .__/_.__/\\__/_/ /_/  \\_, / {o}/ .__/_/\n\
{r}     (  : \"~\" :  )    {p}              /_/                    /___/ {o}/_/\n\
{r}      \"~ .~~~. ~\"\n\
{r}          \"~\"\n\
{n}\n\
\n",
        g = GREEN,
        r = RED,
        b = BLUE,
        o = ORANGE,
        p = PURPLE,
        n = RESET,
    )
}
