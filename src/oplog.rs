/*!
 * Operation log: the ordered record of every filesystem action a run attempts
 */

use std::io;
use std::path::Path;

use serde::Serialize;
use strum::Display;

/// Mechanism strings reported alongside each record, for traceability only.
pub const SYSCALL_MKDIR: &str = "mkdir(2)";
pub const SYSCALL_RENAME: &str = "rename(2)";
pub const SYSCALL_READDIR: &str = "opendir(3)/readdir(3)";
pub const SYSCALL_WRITE: &str = "open(2)/write(2)/close(2)";
pub const SYSCALL_COPY: &str = "open(2)/read(2)/write(2)/close(2)";

/// Kind of filesystem action a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum OpKind {
    /// Directory creation
    #[serde(rename = "mkdir")]
    #[strum(serialize = "mkdir")]
    Mkdir,

    /// File creation or template write
    #[serde(rename = "writeFile")]
    #[strum(serialize = "writeFile")]
    WriteFile,

    /// Byte-for-byte copy of an asset
    #[serde(rename = "copyFile")]
    #[strum(serialize = "copyFile")]
    CopyFile,

    /// Move of a file into its category folder
    #[serde(rename = "rename")]
    #[strum(serialize = "rename")]
    Rename,

    /// Enumeration of the target directory
    #[serde(rename = "readdir")]
    #[strum(serialize = "readdir")]
    ReadDir,
}

/// One logged attempt at a filesystem action, success or failure.
///
/// Field order is the wire order. `path2` carries the destination of a move
/// or copy and is empty for single-path operations; `error` is empty on
/// success.
#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    pub id: usize,
    pub op: OpKind,
    pub description: String,
    pub syscall: String,
    pub path: String,
    pub path2: String,
    pub success: bool,
    pub error: String,
}

/// Append-only sequence of operation records.
///
/// Records are assigned 1-based ids in append order and are never mutated or
/// reordered afterwards. The log grows without bound; a run logs exactly as
/// many operations as it attempts.
#[derive(Debug, Default)]
pub struct OperationLog {
    records: Vec<OperationRecord>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful operation
    pub fn success(
        &mut self,
        op: OpKind,
        description: &str,
        syscall: &str,
        path: &Path,
        path2: Option<&Path>,
    ) {
        self.append(op, description, syscall, path, path2, true, String::new());
    }

    /// Record a failed operation with the underlying system error text
    pub fn failure(
        &mut self,
        op: OpKind,
        description: &str,
        syscall: &str,
        path: &Path,
        path2: Option<&Path>,
        error: &io::Error,
    ) {
        self.append(op, description, syscall, path, path2, false, error.to_string());
    }

    fn append(
        &mut self,
        op: OpKind,
        description: &str,
        syscall: &str,
        path: &Path,
        path2: Option<&Path>,
        success: bool,
        error: String,
    ) {
        let id = self.records.len() + 1;
        self.records.push(OperationRecord {
            id,
            op,
            description: description.to_string(),
            syscall: syscall.to_string(),
            path: path.display().to_string(),
            path2: path2.map(|p| p.display().to_string()).unwrap_or_default(),
            success,
            error,
        });
    }

    /// All records in append order
    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the log for rendering
    pub fn into_records(self) -> Vec<OperationRecord> {
        self.records
    }
}
