//! Export CLI command

use std::path::PathBuf;

use clap::Args;

use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to a timestamped file in the data
    /// directory)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Restrict the export to a month (1-12, current year)
    #[arg(long)]
    pub month: Option<u32>,

    /// Year for the month filter (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,
}

/// Handle the `export` command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let path = service.export_csv(args.file, args.month, args.year)?;

    println!("Expenses exported successfully to: {}", path.display());
    Ok(())
}
