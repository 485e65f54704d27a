//! # layout-projects
//!
//! Project scaffolding library for the layout CLI providing:
//! - Project request resolution (module identifier and local folder name)
//! - Template fetching with overwrite confirmation
//! - Module identifier rewriting across source files
//! - Manifest rename and dependency tidy through the language toolchain
//! - Version-control metadata cleanup
//!
//! External programs run through a [`CommandRunner`] and prompts go through a
//! [`Confirmer`], so both can be replaced in tests.
//!
//! # Examples
//!
//! ```no_run
//! use layout_core::config::ConfigLoader;
//! use layout_projects::{
//!     ProjectRequest, ScaffoldOutcome, Scaffolder, SystemRunner, TerminalConfirmer,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new()?.load(None)?;
//! let request = ProjectRequest::new("github.com/acme/widget")?;
//!
//! let scaffolder = Scaffolder::new(&config, ".", &SystemRunner, &TerminalConfirmer);
//! if let ScaffoldOutcome::Created(summary) = scaffolder.run(&request)? {
//!     println!("created {}", summary.location);
//! }
//! # Ok(())
//! # }
//! ```

pub mod confirm;
pub mod error;
pub mod fetch;
pub mod finalize;
pub mod observer;
pub mod rewrite;
pub mod runner;
pub mod scaffold;
pub mod tidy;
pub mod types;

pub use confirm::{Confirmer, TerminalConfirmer};
pub use error::{Error, Result};
pub use observer::{StageObserver, TracingObserver};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
pub use scaffold::Scaffolder;
pub use types::{ProjectRequest, ProjectSummary, RewriteStats, ScaffoldOutcome, Stage};
