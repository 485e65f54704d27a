//! Configuration loading for the layout CLI

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LayoutConfig, TemplateConfig, ToolchainConfig, VcsConfig};
