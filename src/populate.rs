/*!
 * The populate-mode run: create a directory inside the workspace and seed it
 * with named empty files, or with one random asset per category
 */

use std::fs::{self, File};
use std::io;
use std::path::Path;

use rand::Rng;
use serde::Serialize;

use crate::assets;
use crate::config::PopulateConfig;
use crate::error::{Result, TidyFsError};
use crate::oplog::{OpKind, OperationLog, SYSCALL_COPY, SYSCALL_MKDIR, SYSCALL_WRITE};

/// One asset pool drawn from in asset-mode populate. The `.txt` and `.pdf`
/// pools live under `documents/txt` and `documents/pdf`, unlike backfill
/// which draws both from `documents`.
struct AssetPool {
    dir: &'static str,
    extensions: &'static [&'static str],
}

static ASSET_POOLS: &[AssetPool] = &[
    AssetPool { dir: "audio", extensions: &[".mp3"] },
    AssetPool { dir: "videos", extensions: &[".mp4"] },
    AssetPool { dir: "images", extensions: &[".png", ".jpg", ".jpeg"] },
    AssetPool { dir: "documents/txt", extensions: &[".txt"] },
    AssetPool { dir: "documents/pdf", extensions: &[".pdf"] },
];

/// Result payload of a populate run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulateSummary {
    pub dir_path: String,
    pub created: usize,
}

/// What a populate run produced
#[derive(Debug)]
pub struct PopulateOutcome {
    pub log: OperationLog,
    pub result: Result<PopulateSummary>,
}

/// Single-run populator over one workspace.
pub struct Populator<R: Rng> {
    config: PopulateConfig,
    rng: R,
}

impl<R: Rng> Populator<R> {
    pub fn new(config: PopulateConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Run to completion, consuming the populator.
    pub fn run(mut self) -> PopulateOutcome {
        let mut log = OperationLog::new();

        if let Err(err) = self.config.validate() {
            return PopulateOutcome {
                log,
                result: Err(err),
            };
        }

        let dir_path = self.config.workspace.join(&self.config.dir_name);
        match fs::create_dir(&dir_path) {
            Ok(()) => log.success(OpKind::Mkdir, "Create directory", SYSCALL_MKDIR, &dir_path, None),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => log.success(
                OpKind::Mkdir,
                "Create directory (already exists)",
                SYSCALL_MKDIR,
                &dir_path,
                None,
            ),
            Err(err) => {
                log.failure(OpKind::Mkdir, "Create directory", SYSCALL_MKDIR, &dir_path, None, &err);
                return PopulateOutcome {
                    log,
                    result: Err(TidyFsError::DirectoryCreate {
                        path: dir_path,
                        source: err,
                    }),
                };
            }
        }

        let created = if self.config.file_names.is_empty() {
            match self.populate_from_assets(&dir_path, &mut log) {
                Ok(count) => count,
                Err(err) => {
                    return PopulateOutcome {
                        log,
                        result: Err(err),
                    }
                }
            }
        } else {
            self.create_named_files(&dir_path, &mut log)
        };

        PopulateOutcome {
            log,
            result: Ok(PopulateSummary {
                dir_path: dir_path.display().to_string(),
                created,
            }),
        }
    }

    /// Create each requested file empty. Individual failures are logged and
    /// do not abort; the reported count is the number of files requested.
    fn create_named_files(&self, dir_path: &Path, log: &mut OperationLog) -> usize {
        for file_name in &self.config.file_names {
            let file_path = dir_path.join(file_name);
            match File::create(&file_path) {
                Ok(_) => log.success(OpKind::WriteFile, "Create file", SYSCALL_WRITE, &file_path, None),
                Err(err) => {
                    log.failure(OpKind::WriteFile, "Create file", SYSCALL_WRITE, &file_path, None, &err)
                }
            }
        }
        self.config.file_names.len()
    }

    /// Copy one randomly chosen asset from each pool into the new directory.
    /// Pools with no candidate are skipped; zero picks overall is fatal.
    fn populate_from_assets(&mut self, dir_path: &Path, log: &mut OperationLog) -> Result<usize> {
        let assets_root = self.config.assets_root.as_deref().ok_or_else(|| {
            TidyFsError::InvalidArgument("populate needs file names or an assets root".to_string())
        })?;

        let mut picks = Vec::new();
        for pool in ASSET_POOLS {
            if let Some(asset) = assets::pick(&assets_root.join(pool.dir), pool.extensions, &mut self.rng)
            {
                picks.push(asset);
            }
        }
        if picks.is_empty() {
            return Err(TidyFsError::NoAssets(assets_root.to_path_buf()));
        }

        for asset in &picks {
            let file_name = asset
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            let destination = dir_path.join(&file_name);
            match fs::copy(asset, &destination) {
                Ok(_) => log.success(
                    OpKind::CopyFile,
                    "Populate from assets",
                    SYSCALL_COPY,
                    asset,
                    Some(&destination),
                ),
                Err(err) => log.failure(
                    OpKind::CopyFile,
                    "Populate from assets",
                    SYSCALL_COPY,
                    asset,
                    Some(&destination),
                    &err,
                ),
            }
        }

        Ok(picks.len())
    }
}
