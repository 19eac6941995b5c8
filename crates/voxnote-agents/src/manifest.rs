//! Hand-off manifest for the external agent-hosting runtime.

use std::path::Path;

use anyhow::Context as _;

use crate::roster::Roster;

/// Serialize the roster as pretty JSON to `path`, or to stdout when no path
/// is given. Stdout stays clean for this purpose; all logs go to stderr.
pub fn emit(roster: &Roster, path: Option<&Path>) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(roster).context("serialize agent manifest")?;
    match path {
        Some(p) => {
            if let Some(dir) = p.parent()
                && !dir.as_os_str().is_empty()
            {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("create manifest dir {}", dir.display()))?;
            }
            std::fs::write(p, body.as_bytes())
                .with_context(|| format!("write manifest {}", p.display()))?;
            tracing::info!("wrote agent manifest to {}", p.display());
        }
        None => println!("{}", body),
    }
    Ok(())
}
