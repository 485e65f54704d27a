//! `layout new` command handler

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use layout_core::config::{ConfigLoader, LayoutConfig};
use layout_projects::{
    Error as ProjectError, ProjectRequest, ProjectSummary, ScaffoldOutcome, Scaffolder, Stage,
    StageObserver, SystemRunner, TerminalConfirmer,
};

use crate::cli::NewArgs;
use crate::output;

/// Create a new project from the template
pub fn run(args: NewArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    // A missing argument surfaces as "need project name" before anything runs
    let request = ProjectRequest::new(args.name.unwrap_or_default())?;

    let config = ConfigLoader::new()
        .and_then(|loader| loader.load(config_path))
        .context("Failed to load configuration")?;

    check_tools(&config)?;

    let workdir = std::env::current_dir().context("Failed to determine current directory")?;
    let workdir = Utf8PathBuf::from_path_buf(workdir)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;
    tracing::debug!("Creating {} below {}", request.folder_name(), workdir);

    output::header("Create New Project");
    output::kv("Project", request.project_name());
    output::kv("Folder", request.folder_name());
    output::kv("Template", &config.template.url);
    println!();

    let observer = SpinnerObserver;
    let scaffolder = Scaffolder::new(&config, workdir, &SystemRunner, &TerminalConfirmer)
        .with_observer(&observer);

    // Declining the overwrite ends the run quietly
    if let ScaffoldOutcome::Created(summary) = scaffolder.run(&request)? {
        print_summary(&summary);
    }

    Ok(())
}

/// Fail early when the VCS client or toolchain is not installed
fn check_tools(config: &LayoutConfig) -> Result<()> {
    for program in [&config.vcs.program, &config.toolchain.program] {
        which::which(program).map_err(|_| {
            anyhow!(
                "Required command not found: {}. Please install it and make sure it is in PATH",
                program
            )
        })?;
    }
    Ok(())
}

fn print_summary(summary: &ProjectSummary) {
    println!();
    println!(
        "🎉 🎉 🎉 Project {} created successfully!",
        output::highlight(&summary.project_name)
    );
    println!();
    output::kv("Location", summary.location.as_str());
    output::kv(
        "Rewritten",
        &format!(
            "{} of {} source files ({} -> {})",
            summary.rewrite.files_rewritten,
            summary.rewrite.files_scanned,
            summary.previous_module,
            summary.project_name
        ),
    );
    println!();
    println!("Now run:");
    println!();
    for step in &summary.next_steps {
        println!("› {}", output::highlight(step));
    }
    println!();
}

/// Shows a spinner while a non-interactive stage runs
struct SpinnerObserver;

impl StageObserver for SpinnerObserver {
    fn on_stage_started(&self, stage: Stage) {
        // Prepare may prompt; a spinner would draw over the question
        if stage == Stage::Prepare {
            return;
        }
        output::start_spinner(&format!("{}...", stage));
    }

    fn on_stage_finished(&self, stage: Stage) {
        if stage == Stage::Prepare {
            return;
        }
        output::stop_spinner();
        output::success(stage.label());
    }

    fn on_stage_failed(&self, stage: Stage, _error: &ProjectError) {
        output::stop_spinner();
        output::error(&format!("{} failed", stage));
    }
}
