//! Data export functionality for external analysis and backup.
//!
//! Writes task lists to CSV or JSON files. Whatever filtering the
//! caller applied upstream is what gets exported; this module never
//! queries the store itself.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdash::libs::export::{ExportFormat, Exporter};
//! # fn run(tasks: &[taskdash::libs::task::Task]) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let path = exporter.export(tasks)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use std::fs::File;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and simple tooling.
    Csv,
    /// Pretty-printed JSON preserving field types.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    /// Creates an exporter; without an explicit output path a dated
    /// file name in the current directory is used.
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Writes the tasks and returns the path of the created file.
    pub fn export(&self, tasks: &[Task]) -> Result<PathBuf> {
        let path = self.output.clone().unwrap_or_else(|| self.default_file_name());
        match self.format {
            ExportFormat::Csv => self.write_csv(&path, tasks)?,
            ExportFormat::Json => self.write_json(&path, tasks)?,
        }
        Ok(path)
    }

    fn write_csv(&self, path: &PathBuf, tasks: &[Task]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for task in tasks {
            writer.serialize(task)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, path: &PathBuf, tasks: &[Task]) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, tasks)?;
        Ok(())
    }

    fn default_file_name(&self) -> PathBuf {
        PathBuf::from(format!("tasks_{}.{}", Local::now().format("%Y-%m-%d"), self.format.extension()))
    }
}
