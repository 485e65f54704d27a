//! Scaffolding pipeline orchestration

use crate::confirm::Confirmer;
use crate::error::Result;
use crate::fetch::{clone_template, prepare_destination};
use crate::finalize::{next_steps, remove_vcs_metadata};
use crate::observer::{StageObserver, TracingObserver};
use crate::rewrite::{read_module_name, replace_module, set_module_name};
use crate::runner::CommandRunner;
use crate::tidy::tidy_dependencies;
use crate::types::{ProjectRequest, ProjectSummary, ScaffoldOutcome, Stage};
use camino::{Utf8Path, Utf8PathBuf};
use layout_core::config::LayoutConfig;
use tracing::info;

/// Runs the scaffolding stages in order, stopping at the first failure
///
/// 1. Prepare the destination (ask before overwriting)
/// 2. Clone the template
/// 3. Rewrite the module identifier in every source file
/// 4. Rename the manifest's module
/// 5. Tidy dependencies
/// 6. Strip version-control metadata (best-effort)
///
/// Nothing is rolled back when a stage fails.
pub struct Scaffolder<'a> {
    config: &'a LayoutConfig,
    workdir: Utf8PathBuf,
    runner: &'a dyn CommandRunner,
    confirmer: &'a dyn Confirmer,
    observer: &'a dyn StageObserver,
}

impl<'a> Scaffolder<'a> {
    /// Create a scaffolder creating projects below `workdir`
    pub fn new(
        config: &'a LayoutConfig,
        workdir: impl Into<Utf8PathBuf>,
        runner: &'a dyn CommandRunner,
        confirmer: &'a dyn Confirmer,
    ) -> Self {
        Self {
            config,
            workdir: workdir.into(),
            runner,
            confirmer,
            observer: &TracingObserver,
        }
    }

    /// Replace the default tracing observer
    pub fn with_observer(mut self, observer: &'a dyn StageObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Directory new projects are created in
    pub fn workdir(&self) -> &Utf8Path {
        &self.workdir
    }

    /// Scaffold the project described by `request`
    ///
    /// Returns [`ScaffoldOutcome::Declined`] when the destination exists and
    /// the user chose not to overwrite it.
    pub fn run(&self, request: &ProjectRequest) -> Result<ScaffoldOutcome> {
        let destination = request.destination(&self.workdir);
        let toolchain = &self.config.toolchain;

        let proceed = self.stage(Stage::Prepare, || {
            prepare_destination(&destination, request.folder_name(), self.confirmer)
        })?;
        if !proceed {
            info!("Leaving {} untouched", destination);
            return Ok(ScaffoldOutcome::Declined);
        }

        self.stage(Stage::Clone, || {
            clone_template(&destination, self.config, self.runner)
        })?;

        let (previous_module, rewrite) = self.stage(Stage::Rewrite, || {
            let old = read_module_name(&destination, &toolchain.manifest)?;
            let stats = replace_module(
                &destination,
                &old,
                request.project_name(),
                &toolchain.source_extension,
            )?;
            Ok((old, stats))
        })?;

        self.stage(Stage::ManifestEdit, || {
            set_module_name(&destination, request.project_name(), toolchain, self.runner)
        })?;

        self.stage(Stage::Tidy, || {
            tidy_dependencies(&destination, toolchain, self.runner)
        })?;

        self.stage(Stage::Cleanup, || {
            remove_vcs_metadata(&destination, &self.config.vcs.metadata_dir);
            Ok(())
        })?;

        Ok(ScaffoldOutcome::Created(ProjectSummary {
            project_name: request.project_name().to_string(),
            folder_name: request.folder_name().to_string(),
            next_steps: next_steps(request.folder_name(), &toolchain.run_command),
            location: destination,
            previous_module,
            rewrite,
        }))
    }

    /// Run one stage, reporting it to the observer
    fn stage<T>(&self, stage: Stage, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.observer.on_stage_started(stage);
        match f() {
            Ok(value) => {
                self.observer.on_stage_finished(stage);
                Ok(value)
            }
            Err(e) => {
                self.observer.on_stage_failed(stage, &e);
                Err(e)
            }
        }
    }
}
