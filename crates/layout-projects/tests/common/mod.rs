//! Common test helpers for layout-projects integration tests
//!
//! Provides:
//! - A fake `CommandRunner` that records invocations and simulates the
//!   clone, `mod edit` and `mod tidy` tools on the local filesystem
//! - Template fixture builders
//! - Filesystem snapshots for before/after comparisons

#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use layout_core::config::{LayoutConfig, TemplateConfig, ToolchainConfig, VcsConfig};
use layout_projects::{CommandOutput, CommandRunner, Error, Result, Stage, StageObserver};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;
use walkdir::WalkDir;

pub const TEMPLATE_MODULE: &str = "github.com/Q1mi/gin-layout-base";

// ─── Fake command runner ────────────────────────────────────────────────────

/// One recorded invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<Utf8PathBuf>,
}

impl Invocation {
    pub fn line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Records every call and plays the part of `git` and `go`
///
/// - `git clone [...] <src> <dest>` copies the local directory `src` to `dest`
/// - `go mod edit -module <name>` rewrites the module line of `go.mod` in cwd
/// - `go mod tidy` writes an empty `go.sum` in cwd
#[derive(Debug, Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    failures: RefCell<BTreeMap<String, CommandOutput>>,
    locked: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any invocation whose command line starts with `prefix` fail
    pub fn fail_on(&self, prefix: &str, output: CommandOutput) {
        self.failures.borrow_mut().insert(prefix.to_string(), output);
    }

    /// Strip all permissions from `relative` in every simulated clone
    pub fn lock_after_clone(&self, relative: &str) {
        self.locked.borrow_mut().push(relative.to_string());
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(Invocation::line).collect()
    }

    /// Assert the program was NOT called.
    pub fn assert_not_called(&self, program: &str) {
        let calls = self.calls.borrow();
        assert!(
            !calls.iter().any(|c| c.program == program),
            "'{}' was called but should not have been. Actual calls: {:?}",
            program,
            *calls
        );
    }

    fn simulate(&self, program: &str, args: &[&str], cwd: Option<&Utf8Path>) -> CommandOutput {
        match (program, args) {
            ("git", ["clone", .., src, dest]) => {
                match copy_tree(Utf8Path::new(src), Utf8Path::new(dest)) {
                    Ok(()) => {
                        for relative in self.locked.borrow().iter() {
                            lock(&Utf8Path::new(dest).join(relative));
                        }
                        CommandOutput::ok(format!("Cloning into '{}'...\n", dest))
                    }
                    Err(e) => CommandOutput::failed(128, format!("fatal: {}\n", e)),
                }
            }
            ("go", ["mod", "edit", "-module", name]) => {
                let manifest = cwd.expect("go mod edit needs a cwd").join("go.mod");
                let content = match fs::read_to_string(&manifest) {
                    Ok(content) => content,
                    Err(e) => return CommandOutput::failed(1, format!("go: {}\n", e)),
                };
                let rewritten: Vec<String> = content
                    .lines()
                    .map(|line| {
                        if line.trim_start().starts_with("module ") {
                            format!("module {}", name)
                        } else {
                            line.to_string()
                        }
                    })
                    .collect();
                fs::write(&manifest, rewritten.join("\n") + "\n").unwrap();
                CommandOutput::ok("")
            }
            ("go", ["mod", "tidy"]) => {
                fs::write(cwd.expect("go mod tidy needs a cwd").join("go.sum"), "").unwrap();
                CommandOutput::ok("")
            }
            _ => CommandOutput::failed(127, format!("{}: command not simulated\n", program)),
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Utf8Path>) -> Result<CommandOutput> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: cwd.map(Utf8Path::to_path_buf),
        };
        let line = invocation.line();
        self.calls.borrow_mut().push(invocation);

        if let Some(output) = self
            .failures
            .borrow()
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, output)| output.clone())
        {
            return Ok(output);
        }

        Ok(self.simulate(program, args, cwd))
    }
}

// ─── Stage recording ────────────────────────────────────────────────────────

/// Observer that records stage events as strings
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: RefCell<Vec<String>>,
}

impl StageObserver for RecordingObserver {
    fn on_stage_started(&self, stage: Stage) {
        self.events.borrow_mut().push(format!("start {:?}", stage));
    }

    fn on_stage_finished(&self, stage: Stage) {
        self.events.borrow_mut().push(format!("done {:?}", stage));
    }

    fn on_stage_failed(&self, stage: Stage, _error: &Error) {
        self.events.borrow_mut().push(format!("fail {:?}", stage));
    }
}

// ─── Fixtures ───────────────────────────────────────────────────────────────

/// A temp area holding a template fixture and an empty working directory
pub struct Workspace {
    _temp: TempDir,
    pub template: Utf8PathBuf,
    pub workdir: Utf8PathBuf,
}

impl Workspace {
    /// Workspace with the standard gin-layout-base style template
    pub fn new() -> Self {
        let workspace = Self::empty();
        write_template(&workspace.template);
        workspace
    }

    /// Workspace whose template directory exists but is empty
    pub fn empty() -> Self {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let template = root.join("template");
        let workdir = root.join("work");
        fs::create_dir_all(&template).unwrap();
        fs::create_dir_all(&workdir).unwrap();
        Self {
            _temp: temp,
            template,
            workdir,
        }
    }

    /// Configuration pointing the clone at the local template fixture
    pub fn config(&self) -> LayoutConfig {
        LayoutConfig {
            template: TemplateConfig {
                url: self.template.to_string(),
                branch: None,
                depth: None,
            },
            vcs: VcsConfig {
                program: "git".to_string(),
                metadata_dir: ".git".to_string(),
            },
            toolchain: ToolchainConfig {
                program: "go".to_string(),
                manifest: "go.mod".to_string(),
                source_extension: "go".to_string(),
                run_command: "go run cmd/server/main.go".to_string(),
            },
        }
    }
}

/// Write a small Go web-service template declaring [`TEMPLATE_MODULE`]
pub fn write_template(dir: &Utf8Path) {
    let files = [
        (
            "go.mod",
            format!(
                "module {}\n\ngo 1.21\n\nrequire github.com/gin-gonic/gin v1.9.1\n",
                TEMPLATE_MODULE
            ),
        ),
        (
            "cmd/server/main.go",
            format!(
                "package main\n\nimport (\n\t\"{m}/internal/router\"\n\t\"{m}/pkg/logger\"\n)\n\nfunc main() {{\n\tlogger.Init()\n\trouter.Setup().Run()\n}}\n",
                m = TEMPLATE_MODULE
            ),
        ),
        (
            "internal/router/router.go",
            format!(
                "// Package router wires routes for {m}.\npackage router\n\nimport \"{m}/internal/handler\"\n",
                m = TEMPLATE_MODULE
            ),
        ),
        (
            "internal/handler/ping.go",
            "package handler\n\nfunc Ping() string { return \"pong\" }\n".to_string(),
        ),
        ("pkg/logger/logger.go", "package logger\n\nfunc Init() {}\n".to_string()),
        (
            "README.md",
            format!("# {}\n\nA gin project layout.\n", TEMPLATE_MODULE),
        ),
        ("conf/config.yaml", "port: 8080\n".to_string()),
        (".git/HEAD", "ref: refs/heads/main\n".to_string()),
        (".git/config", "[core]\n\tbare = false\n".to_string()),
    ];

    for (path, content) in files {
        let path = dir.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Recursively copy `src` into a new directory `dest`
pub fn copy_tree(src: &Utf8Path, dest: &Utf8Path) -> std::io::Result<()> {
    if dest.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("destination path '{}' already exists", dest),
        ));
    }
    if !src.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("repository '{}' does not exist", src),
        ));
    }

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(std::io::Error::other)?;
        let relative = entry.path().strip_prefix(src).unwrap();
        let target = dest.as_std_path().join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn lock(path: &Utf8Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
}

#[cfg(not(unix))]
fn lock(_path: &Utf8Path) {}

/// Every file below `dir` (relative path -> contents)
pub fn snapshot(dir: &Utf8Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    if !dir.exists() {
        return files;
    }
    for entry in WalkDir::new(dir) {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            let relative = entry
                .path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            files.insert(relative, fs::read(entry.path()).unwrap());
        }
    }
    files
}
