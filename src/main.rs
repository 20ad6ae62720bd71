use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use finance_tracker::cli::{
    handle_account_command, handle_expense_command, handle_import_command, handle_income_command,
    handle_list_command, handle_report_command, handle_show_command, AccountCommands, ExpenseArgs,
    IncomeArgs, ReportArgs,
};
use finance_tracker::config::{paths::DATA_DIR_ENV, Settings, TrackerPaths};
use finance_tracker::display::DisplayFormat;
use finance_tracker::logging::init_tracing;
use finance_tracker::storage::CsvLedgerRepository;

#[derive(Parser)]
#[command(
    name = "tracker",
    version,
    about = "Personal income and expense tracker",
    long_about = "Records income and expenses against named accounts, lists them by \
                  month, and summarizes each month by category. Data is kept as CSV \
                  files in the data directory."
)]
struct Cli {
    /// Base directory for settings, data and reports
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record income
    Income(IncomeArgs),

    /// Record an expense
    Expense(ExpenseArgs),

    /// List transactions, oldest first
    #[command(alias = "ls")]
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show one transaction
    Show {
        /// Transaction id or unambiguous prefix
        id: String,
    },

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Summarize income, expense and categories
    Report(ReportArgs),

    /// Import transactions from a CSV file (already known ids are skipped)
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let repo = CsvLedgerRepository::from_paths(&paths);
    let format = DisplayFormat::from(&settings);

    match cli.command {
        Some(Commands::Income(args)) => handle_income_command(&repo, &format, args)?,
        Some(Commands::Expense(args)) => handle_expense_command(&repo, &format, args)?,
        Some(Commands::List { month }) => handle_list_command(&repo, &format, month)?,
        Some(Commands::Show { id }) => handle_show_command(&repo, &format, &id)?,
        Some(Commands::Account(cmd)) => handle_account_command(&repo, &settings, cmd)?,
        Some(Commands::Report(args)) => handle_report_command(&repo, &format, args)?,
        Some(Commands::Import { file }) => handle_import_command(&repo, &file)?,
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Currency:             {} ({})",
                settings.currency, settings.currency_symbol
            );
            println!("  Default account type: {}", settings.default_account_type);
            println!("  Date format:          {}", settings.date_format);
            println!("  Base tax rate:        {}", settings.base_tax_rate);
        }
        None => {
            println!("tracker - personal income and expense tracker");
            println!();
            println!("Run 'tracker --help' for usage information.");
        }
    }

    Ok(())
}
