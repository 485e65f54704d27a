//! Configuration model for the layout CLI

use serde::{Deserialize, Serialize};

/// Top-level layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LayoutConfig {
    /// Template repository to scaffold from
    pub template: TemplateConfig,

    /// Version-control client settings
    pub vcs: VcsConfig,

    /// Language toolchain settings
    pub toolchain: ToolchainConfig,
}

/// Template repository settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateConfig {
    /// Clone URL (or local path) of the template repository
    pub url: String,

    /// Branch to clone instead of the remote default
    #[serde(default)]
    pub branch: Option<String>,

    /// Shallow clone depth
    #[serde(default)]
    pub depth: Option<u32>,
}

/// Version-control client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VcsConfig {
    /// Program used for `clone`
    pub program: String,

    /// Metadata directory stripped from the finished project
    pub metadata_dir: String,
}

/// Language toolchain settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolchainConfig {
    /// Program providing `mod edit` and `mod tidy`
    pub program: String,

    /// Dependency manifest at the project root
    pub manifest: String,

    /// Extension (without the dot) of files whose contents get rewritten
    pub source_extension: String,

    /// Command suggested to the user for starting the new project
    pub run_command: String,
}

impl LayoutConfig {
    /// Arguments for the clone invocation, excluding the program itself
    pub fn clone_args(&self, destination: &str) -> Vec<String> {
        let mut args = vec!["clone".to_string()];

        if let Some(depth) = self.template.depth {
            args.push("--depth".to_string());
            args.push(depth.to_string());
        }

        if let Some(branch) = &self.template.branch {
            args.push("--branch".to_string());
            args.push(branch.clone());
        }

        args.push(self.template.url.clone());
        args.push(destination.to_string());
        args
    }
}
