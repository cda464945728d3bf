/*!
 * Configuration handling for tidyfs
 */

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::error::{Result, TidyFsError};

/// Command-line arguments for tidyfs
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "tidyfs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sort the top-level files of a directory into category folders",
    long_about = "Classifies each top-level file of a directory by extension, moves it into one \
                  of five category folders (Documents, Images, Audio, Videos, Others), and emits \
                  every filesystem step as a JSON operation log on stdout."
)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,

    /// Print a table of the run's operations to stderr
    #[clap(long, global = true)]
    pub summary: bool,
}

/// Invocation modes
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify the top-level files of a directory and move them into category folders
    Organize {
        /// Workspace root directory
        workspace: String,

        /// Subdirectory of the workspace to organize (defaults to the workspace itself)
        #[clap(default_value = "")]
        subpath: String,

        /// Demo asset pool used to fill files that were empty when moved
        #[clap(long)]
        assets: Option<String>,
    },

    /// Create a directory and populate it with named empty files or demo assets
    Populate {
        /// Workspace root directory
        workspace: String,

        /// Name of the directory to create inside the workspace
        dir_name: String,

        /// Files to create empty inside the new directory
        files: Vec<String>,

        /// Demo asset pool; with no FILES, one asset per category is copied in
        #[clap(long)]
        assets: Option<String>,
    },
}

/// Configuration for an organize run
#[derive(Debug, Clone)]
pub struct OrganizeConfig {
    /// Directory whose top-level entries are classified and moved
    pub target_dir: PathBuf,

    /// Asset pool root; `None` disables all backfill
    pub assets_root: Option<PathBuf>,
}

impl OrganizeConfig {
    /// Build the target path from the workspace and optional subpath
    pub fn new(workspace: &str, subpath: &str, assets: Option<&str>) -> Self {
        let workspace = PathBuf::from(workspace);
        let target_dir = if subpath.is_empty() {
            workspace
        } else {
            workspace.join(subpath)
        };
        Self {
            target_dir,
            assets_root: assets.map(PathBuf::from),
        }
    }
}

/// Configuration for a populate run
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    pub workspace: PathBuf,

    /// Single path component; validated before anything is created
    pub dir_name: String,

    /// Files to create empty; when empty, assets are copied in instead
    pub file_names: Vec<String>,

    pub assets_root: Option<PathBuf>,
}

impl PopulateConfig {
    pub fn new(workspace: &str, dir_name: &str, file_names: Vec<String>, assets: Option<&str>) -> Self {
        Self {
            workspace: PathBuf::from(workspace),
            dir_name: dir_name.trim().to_string(),
            file_names,
            assets_root: assets.map(PathBuf::from),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.dir_name.is_empty() {
            return Err(TidyFsError::InvalidArgument(
                "directory name must not be empty".to_string(),
            ));
        }
        if self.dir_name == "."
            || self.dir_name == ".."
            || self.dir_name.contains('/')
            || self.dir_name.contains('\\')
        {
            return Err(TidyFsError::InvalidArgument(format!(
                "invalid directory name: {}",
                self.dir_name
            )));
        }
        Ok(())
    }
}
