use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_budget_command, handle_delete_command, handle_export_command,
    handle_list_command, handle_summary_command, handle_update_command, AddArgs, BudgetCommands,
    DeleteArgs, ExportArgs, ListArgs, SummaryArgs, UpdateArgs,
};
use expense_tracker::config::DataPaths;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Command-line expense tracker with monthly budgets",
    long_about = "Track expenses from the command line: record spending, view \
                  monthly and per-category totals, set monthly budgets, and \
                  export everything to CSV."
)]
struct Cli {
    /// Data directory (defaults to ./data)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add(AddArgs),

    /// Update an existing expense
    Update(UpdateArgs),

    /// Delete an expense
    Delete(DeleteArgs),

    /// List expenses
    List(ListArgs),

    /// View a summary of expenses
    Summary(SummaryArgs),

    /// Manage monthly budgets
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export expenses to CSV
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => DataPaths::with_base_dir(dir),
        None => DataPaths::new(),
    };
    let storage = Storage::new(paths)?;
    storage.load_all();

    let command = match cli.command {
        Some(command) => command,
        None => {
            print_usage();
            return Ok(());
        }
    };

    let result = match command {
        Commands::Add(args) => handle_add_command(&storage, args),
        Commands::Update(args) => handle_update_command(&storage, args),
        Commands::Delete(args) => handle_delete_command(&storage, args),
        Commands::List(args) => handle_list_command(&storage, args),
        Commands::Summary(args) => handle_summary_command(&storage, args),
        Commands::Budget(cmd) => handle_budget_command(&storage, cmd),
        Commands::Export(args) => handle_export_command(&storage, args),
    };

    // Operation failures are messages, not process failures
    if let Err(e) = result {
        println!("Error: {e}");
    }

    Ok(())
}

fn print_usage() {
    println!("Expense Tracker CLI");
    println!("Usage: expense-tracker <command> [options]");
    println!();
    println!("Available commands:");
    println!("  add              Add a new expense");
    println!("  update           Update an existing expense");
    println!("  delete           Delete an expense");
    println!("  list             List expenses");
    println!("  summary          View a summary of expenses");
    println!("  budget           Manage monthly budgets");
    println!("  export           Export expenses to CSV");
    println!();
    println!("Run 'expense-tracker --help' for details.");
}
