//! # layout-core
//!
//! Core library for the layout CLI providing:
//! - The configuration model (template source, VCS client, language toolchain)
//! - Hierarchical configuration loading (embedded defaults, config file, environment)
//! - Shared error types
//!
//! # Examples
//!
//! ```no_run
//! use layout_core::config::ConfigLoader;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new()?.load(None)?;
//! println!("template: {}", config.template.url);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;

pub use error::{Error, Result};
