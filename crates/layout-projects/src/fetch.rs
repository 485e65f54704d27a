//! Template fetching: destination preparation and clone

use crate::confirm::Confirmer;
use crate::error::{Error, Result};
use crate::runner::{run_checked, CommandRunner};
use camino::Utf8Path;
use layout_core::config::LayoutConfig;
use std::fs;
use tracing::{debug, info};

/// Make sure `destination` is free for the clone
///
/// If something already exists there the user is asked whether to overwrite
/// it. Returns `Ok(false)` when they decline, in which case nothing on disk
/// has been touched.
///
/// # Errors
/// Returns error if:
/// - The prompt fails
/// - Removing the existing folder fails
pub fn prepare_destination(
    destination: &Utf8Path,
    folder_name: &str,
    confirmer: &dyn Confirmer,
) -> Result<bool> {
    let existing = match fs::symlink_metadata(destination) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(e.into()),
    };

    let message = format!(
        "Folder {} already exists, do you want to overwrite it?",
        folder_name
    );
    if !confirmer.confirm(&message)? {
        debug!("Overwrite of {} declined", destination);
        return Ok(false);
    }

    info!("Removing existing folder: {}", destination);
    let removed = if existing.is_dir() {
        fs::remove_dir_all(destination)
    } else {
        fs::remove_file(destination)
    };
    removed.map_err(|e| Error::remove_existing(destination.as_str(), e))?;

    Ok(true)
}

/// Clone the configured template into `destination`
///
/// # Errors
/// Returns error if the VCS client cannot be started or exits unsuccessfully;
/// the error carries the client's combined output.
pub fn clone_template(
    destination: &Utf8Path,
    config: &LayoutConfig,
    runner: &dyn CommandRunner,
) -> Result<()> {
    info!("{} clone {}", config.vcs.program, config.template.url);

    let args = config.clone_args(destination.as_str());
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run_checked(runner, &config.vcs.program, &args, None)?;

    debug!("Template cloned into {}", destination);
    Ok(())
}
