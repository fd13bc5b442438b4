//! Task export command. Exports the same selection the list command
//! would show, so what you see is what lands in the file.

use super::list::FilterArgs;
use super::require_session;
use crate::db::tasks::Tasks;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file path (defaults to tasks_<date>.<ext>)
    #[arg(long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    filter: FilterArgs,
    /// Export only rows matching this search text
    #[arg(long, conflicts_with_all = ["statuses", "employees", "projects"])]
    search: Option<String>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    require_session()?;
    let mut tasks = Tasks::new()?;
    let rows = match &export_args.search {
        Some(text) => tasks.search(text)?,
        None => tasks.fetch(export_args.filter.to_filter())?,
    };

    if rows.is_empty() {
        msg_info!(Message::ExportNothingToExport);
        return Ok(());
    }

    let path = Exporter::new(export_args.format, export_args.output).export(&rows)?;
    msg_success!(Message::ExportSuccess(path.display().to_string()));
    Ok(())
}
