//! Dependency tidy step

use crate::error::Result;
use crate::runner::{run_checked, CommandRunner};
use camino::Utf8Path;
use layout_core::config::ToolchainConfig;
use tracing::info;

/// Run `<toolchain> mod tidy` inside `project_dir`
///
/// Must run after the manifest rename so the regenerated lock metadata is
/// recorded against the new module identity. On failure the project folder
/// is left as it is.
pub fn tidy_dependencies(
    project_dir: &Utf8Path,
    toolchain: &ToolchainConfig,
    runner: &dyn CommandRunner,
) -> Result<()> {
    info!("{} mod tidy", toolchain.program);
    run_checked(runner, &toolchain.program, &["mod", "tidy"], Some(project_dir))?;
    Ok(())
}
