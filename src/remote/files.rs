//! Remote file editing helpers
//!
//! Small idempotent operations on remote files, all expressed through
//! the [`Remote`] trait: root-owned file writes, guarded line appends,
//! commenting lines out.

use crate::error::KioskResult;
use crate::remote::{shell_quote, Remote};

/// (Over)write a root-owned file.
///
/// Uploads to a mktemp path as the login user, then copies into place
/// with sudo and fixes the mode, so the content never has to survive a
/// trip through shell quoting.
pub async fn write_file(remote: &dyn Remote, path: &str, contents: &str) -> KioskResult<()> {
    let tmp = remote.run("mktemp").await?;
    let tmp = tmp.trim().to_string();

    remote
        .run_with_input(&format!("cat > {}", shell_quote(&tmp)), contents)
        .await?;
    remote
        .sudo(&format!(
            "cp {t} {p} && chmod 644 {p} && rm {t}",
            t = shell_quote(&tmp),
            p = shell_quote(path)
        ))
        .await?;
    Ok(())
}

/// Whether the file contains `line` exactly (full-line match).
pub async fn file_contains(remote: &dyn Remote, path: &str, line: &str) -> KioskResult<bool> {
    // grep exits 1 on no match, which run() would treat as a failure,
    // so fold the answer into stdout instead.
    let out = remote
        .run(&format!(
            "grep -qxF -- {} {} 2>/dev/null && echo found || true",
            shell_quote(line),
            shell_quote(path)
        ))
        .await?;
    Ok(out.trim() == "found")
}

/// Append `line` to a file owned by the login user, unless already present.
pub async fn append_line(remote: &dyn Remote, path: &str, line: &str) -> KioskResult<()> {
    remote.run(&append_command(path, line)).await?;
    Ok(())
}

/// Append `line` to a root-owned file, unless already present.
pub async fn sudo_append_line(remote: &dyn Remote, path: &str, line: &str) -> KioskResult<()> {
    remote.sudo(&append_command(path, line)).await?;
    Ok(())
}

/// Comment out every line of a root-owned file that exactly matches `line`.
pub async fn sudo_comment_line(remote: &dyn Remote, path: &str, line: &str) -> KioskResult<()> {
    let script = format!("s|^{}$|#&|", sed_escape(line));
    remote
        .sudo(&format!("sed -i {} {}", shell_quote(&script), shell_quote(path)))
        .await?;
    Ok(())
}

/// One-round-trip guarded append: grep for the exact line, append if absent.
fn append_command(path: &str, line: &str) -> String {
    let q = shell_quote(line);
    let p = shell_quote(path);
    format!("grep -qxF -- {q} {p} 2>/dev/null || printf '%s\\n' {q} >> {p}")
}

/// Escape a literal string for use inside a `|`-delimited sed pattern.
fn sed_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '|' | '&' | '[' | ']' | '*' | '.' | '^' | '$') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
