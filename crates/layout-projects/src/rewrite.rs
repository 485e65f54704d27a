//! Module identity rewrite
//!
//! Renames the template's module identifier to the new project's identifier:
//! the old name is read from the manifest, every literal occurrence of it in
//! source files is replaced, and the manifest itself is renamed through the
//! toolchain's `mod edit`.

use crate::error::{Error, Result};
use crate::runner::{run_checked, CommandRunner};
use crate::types::RewriteStats;
use camino::Utf8Path;
use layout_core::config::ToolchainConfig;
use regex::bytes::{NoExpand, Regex};
use std::borrow::Cow;
use std::fs;
use tracing::{debug, info, trace};
use walkdir::WalkDir;

/// Keyword introducing the module declaration
const MODULE_KEYWORD: &str = "module";

/// Extract the module identifier from manifest text
///
/// The first line that is neither blank nor a `//` comment must read
/// `module <identifier>`. A quoted identifier is unquoted.
pub fn parse_module_name(content: &str) -> std::result::Result<String, String> {
    let line = content
        .lines()
        .map(|line| line.trim_start_matches('\u{feff}').trim())
        .find(|line| !line.is_empty() && !line.starts_with("//"))
        .ok_or_else(|| "manifest is empty".to_string())?;

    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(MODULE_KEYWORD) {
        return Err(format!("expected `module <name>`, found `{}`", line));
    }

    let name = tokens
        .next()
        .filter(|token| !token.starts_with("//"))
        .ok_or_else(|| "module directive has no name".to_string())?;

    let name = unquote(name);
    if name.is_empty() {
        return Err("module name is empty".to_string());
    }

    Ok(name.to_string())
}

fn unquote(token: &str) -> &str {
    for quote in ['"', '`'] {
        if let Some(inner) = token
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    token
}

/// Read the module identifier declared by the manifest in `project_dir`
///
/// # Errors
/// Returns error if the manifest is missing, unreadable, or malformed.
pub fn read_module_name(project_dir: &Utf8Path, manifest: &str) -> Result<String> {
    let path = project_dir.join(manifest);

    let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::manifest_not_found(path.as_str()),
        std::io::ErrorKind::InvalidData => Error::manifest_parse(path.as_str(), "not valid UTF-8"),
        _ => Error::Io(e),
    })?;

    let name =
        parse_module_name(&content).map_err(|msg| Error::manifest_parse(path.as_str(), msg))?;
    debug!("Template module name: {}", name);
    Ok(name)
}

/// Replace every occurrence of `old` with `new` in source files below `project_dir`
///
/// Only regular files with the given extension are touched; symlinks are
/// not followed. Replacement is a plain byte substring match. Files are
/// written back in place, so their permissions stay as they were, and files
/// without an occurrence are left alone.
///
/// Stops at the first IO failure; files already rewritten stay rewritten.
pub fn replace_module(
    project_dir: &Utf8Path,
    old: &str,
    new: &str,
    extension: &str,
) -> Result<RewriteStats> {
    let mut stats = RewriteStats::default();

    // Nothing to look for
    if old.is_empty() {
        return Ok(stats);
    }

    info!("Replacing {} with {}", old, new);
    let pattern = Regex::new(&regex::escape(old))?;

    for entry in WalkDir::new(project_dir).follow_links(false) {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }

        let path = entry.path();
        stats.files_scanned += 1;

        let data =
            fs::read(path).map_err(|e| Error::file_rewrite(path.display().to_string(), e))?;

        match pattern.replace_all(&data, NoExpand(new.as_bytes())) {
            Cow::Borrowed(_) => trace!("No occurrences in {}", path.display()),
            Cow::Owned(rewritten) => {
                fs::write(path, rewritten)
                    .map_err(|e| Error::file_rewrite(path.display().to_string(), e))?;
                stats.files_rewritten += 1;
                debug!("Rewrote {}", path.display());
            }
        }
    }

    info!(
        "Rewrote {} of {} source files",
        stats.files_rewritten, stats.files_scanned
    );
    Ok(stats)
}

/// Set the manifest's module name through `<toolchain> mod edit -module <new>`
pub fn set_module_name(
    project_dir: &Utf8Path,
    new: &str,
    toolchain: &ToolchainConfig,
    runner: &dyn CommandRunner,
) -> Result<()> {
    info!("{} mod edit -module {}", toolchain.program, new);
    run_checked(
        runner,
        &toolchain.program,
        &["mod", "edit", "-module", new],
        Some(project_dir),
    )?;
    Ok(())
}
