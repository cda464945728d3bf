/*!
 * Reporting functionality for tidyfs
 *
 * Renders a run's operation log and result into the JSON payload emitted on
 * stdout, and optionally into a console table for human readers.
 */

use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::error::{Result, TidyFsError};
use crate::oplog::{OperationLog, OperationRecord};
use crate::organizer::CategoryBuckets;
use crate::populate::PopulateSummary;

/// The single document a run emits. Field order is the wire order; `error`
/// appears only on the fatal path, where `operations` is empty and `result`
/// is null.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub operations: Vec<OperationRecord>,
    pub result: Option<RunResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Mode-specific result payload
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RunResult {
    Organized(CategoryBuckets),
    Populated(PopulateSummary),
}

impl RunReport {
    pub fn organized(log: OperationLog, buckets: CategoryBuckets) -> Self {
        Self {
            operations: log.into_records(),
            result: Some(RunResult::Organized(buckets)),
            error: None,
        }
    }

    pub fn populated(log: OperationLog, summary: PopulateSummary) -> Self {
        Self {
            operations: log.into_records(),
            result: Some(RunResult::Populated(summary)),
            error: None,
        }
    }

    pub fn failed(error: &TidyFsError) -> Self {
        Self {
            operations: Vec::new(),
            result: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Single-line JSON document on stdout
    Json,
    /// Console table on stderr
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string for the run
    pub fn generate(&self, report: &RunReport) -> Result<String> {
        match self.format {
            ReportFormat::Json => Ok(serde_json::to_string(report)?),
            ReportFormat::ConsoleTable => Ok(self.generate_console_table(report)),
        }
    }

    /// Print the report to its channel: stdout for JSON, stderr for tables
    pub fn print(&self, report: &RunReport) -> Result<()> {
        match self.format {
            ReportFormat::Json => println!("{}", self.generate(report)?),
            ReportFormat::ConsoleTable => eprintln!("\n{}", self.generate(report)?),
        }
        Ok(())
    }

    fn generate_console_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct OperationRow {
            #[tabled(rename = "#")]
            id: usize,

            #[tabled(rename = "Op")]
            op: String,

            #[tabled(rename = "Path")]
            path: String,

            #[tabled(rename = "Outcome")]
            outcome: String,
        }

        let rows: Vec<OperationRow> = report
            .operations
            .iter()
            .map(|record| OperationRow {
                id: record.id,
                op: record.op.to_string(),
                path: if record.path2.is_empty() {
                    record.path.clone()
                } else {
                    format!("{} -> {}", record.path, record.path2)
                },
                outcome: if record.success {
                    "ok".to_string()
                } else {
                    record.error.clone()
                },
            })
            .collect();

        let failed = report
            .operations
            .iter()
            .filter(|record| !record.success)
            .count();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        format!(
            "{}\n{} operations, {} failed",
            table,
            report.operations.len(),
            failed
        )
    }
}
