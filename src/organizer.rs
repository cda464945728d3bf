/*!
 * The organize-mode run: category folder creation, classification, moves,
 * and demo-content backfill, all recorded in the operation log
 */

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use indicatif::ProgressBar;
use rand::Rng;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::category::{classify, Category};
use crate::config::OrganizeConfig;
use crate::error::TidyFsError;
use crate::filler::ContentFiller;
use crate::oplog::{OpKind, OperationLog, SYSCALL_MKDIR, SYSCALL_READDIR, SYSCALL_RENAME};

/// Per-category lists of the filenames successfully moved during a run,
/// in processing order of the directory listing.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryBuckets {
    pub documents: Vec<String>,
    pub images: Vec<String>,
    pub audio: Vec<String>,
    pub videos: Vec<String>,
    pub others: Vec<String>,
}

impl CategoryBuckets {
    pub fn push(&mut self, category: Category, file_name: String) {
        self.bucket_mut(category).push(file_name);
    }

    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Documents => &self.documents,
            Category::Images => &self.images,
            Category::Audio => &self.audio,
            Category::Videos => &self.videos,
            Category::Others => &self.others,
        }
    }

    /// Count of files moved across all categories
    pub fn total(&self) -> usize {
        Category::iter().map(|category| self.bucket(category).len()).sum()
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Documents => &mut self.documents,
            Category::Images => &mut self.images,
            Category::Audio => &mut self.audio,
            Category::Videos => &mut self.videos,
            Category::Others => &mut self.others,
        }
    }
}

/// What an organize run produced: the full operation log, and either the
/// per-category buckets or the fatal error that stopped the run.
#[derive(Debug)]
pub struct OrganizeOutcome {
    pub log: OperationLog,
    pub result: Result<CategoryBuckets, TidyFsError>,
}

/// Single-run organizer over one target directory.
///
/// The run is synchronous and sequential; each filesystem action completes
/// before the next is attempted. One file's failure never aborts the run;
/// only an unreadable target directory does.
pub struct Organizer<R: Rng> {
    config: OrganizeConfig,
    progress: Arc<ProgressBar>,
    rng: R,
}

impl<R: Rng> Organizer<R> {
    pub fn new(config: OrganizeConfig, progress: Arc<ProgressBar>, rng: R) -> Self {
        Self {
            config,
            progress,
            rng,
        }
    }

    /// Run to completion, consuming the organizer.
    pub fn run(mut self) -> OrganizeOutcome {
        let mut log = OperationLog::new();
        let target = self.config.target_dir.clone();

        // Opening the target is the only fatal step. Nothing is created
        // before it succeeds.
        let entries: Vec<PathBuf> = match fs::read_dir(&target) {
            Ok(read_dir) => {
                log.success(
                    OpKind::ReadDir,
                    "Read directory entries",
                    SYSCALL_READDIR,
                    &target,
                    None,
                );
                read_dir
                    .filter_map(Result::ok)
                    .map(|entry| entry.path())
                    .collect()
            }
            Err(err) => {
                log.failure(
                    OpKind::ReadDir,
                    "Read directory entries",
                    SYSCALL_READDIR,
                    &target,
                    None,
                    &err,
                );
                return OrganizeOutcome {
                    log,
                    result: Err(TidyFsError::DirectoryOpen {
                        path: target,
                        source: err,
                    }),
                };
            }
        };

        // Category folders are ensured unconditionally. "Already exists" is
        // recorded with whatever the system reports but never fails the run.
        for category in Category::iter() {
            let folder = target.join(category.folder_name());
            match fs::create_dir(&folder) {
                Ok(()) => log.success(
                    OpKind::Mkdir,
                    "Create category folder",
                    SYSCALL_MKDIR,
                    &folder,
                    None,
                ),
                Err(err) => log.failure(
                    OpKind::Mkdir,
                    "Create category folder",
                    SYSCALL_MKDIR,
                    &folder,
                    None,
                    &err,
                ),
            }
        }

        let mut buckets = CategoryBuckets::default();
        self.progress.set_length(entries.len() as u64);

        for source in entries {
            self.progress.inc(1);
            let name = match source.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };
            self.progress.set_message(name.clone());

            // Directories stay put, category folders included.
            if fs::metadata(&source).map(|meta| meta.is_dir()).unwrap_or(false) {
                continue;
            }

            let category = classify(&name);
            let destination = target.join(category.folder_name()).join(&name);
            match fs::rename(&source, &destination) {
                Ok(()) => {
                    log.success(
                        OpKind::Rename,
                        "Move file to category",
                        SYSCALL_RENAME,
                        &source,
                        Some(&destination),
                    );
                    if let Some(assets_root) = self.config.assets_root.as_deref() {
                        ContentFiller::new(assets_root).fill(&destination, &mut log, &mut self.rng);
                    }
                    buckets.push(category, name);
                }
                Err(err) => log.failure(
                    OpKind::Rename,
                    "Move file to category",
                    SYSCALL_RENAME,
                    &source,
                    Some(&destination),
                    &err,
                ),
            }
        }

        self.progress.finish_and_clear();

        OrganizeOutcome {
            log,
            result: Ok(buckets),
        }
    }
}
