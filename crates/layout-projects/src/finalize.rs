//! Finishing touches for a freshly scaffolded project

use camino::Utf8Path;
use std::fs;
use tracing::{debug, warn};

/// Remove the version-control metadata directory from `project_dir`
///
/// Best-effort by contract: a failure is logged and swallowed, it never
/// fails the run. Returns whether the directory is gone afterwards.
pub fn remove_vcs_metadata(project_dir: &Utf8Path, metadata_dir: &str) -> bool {
    let path = project_dir.join(metadata_dir);

    let removed = match fs::symlink_metadata(&path) {
        Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(&path),
        // Worktrees and submodules use a `.git` file
        Ok(_) => fs::remove_file(&path),
        Err(e) => Err(e),
    };

    match removed {
        Ok(()) => {
            debug!("Removed {}", path);
            true
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
        Err(e) => {
            warn!("Could not remove {}: {}", path, e);
            false
        }
    }
}

/// Commands suggested to the user once the project exists
pub fn next_steps(folder_name: &str, run_command: &str) -> Vec<String> {
    vec![format!("cd {}", folder_name), run_command.to_string()]
}
