//! Account CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::account::format_account_list;
use crate::error::TrackerResult;
use crate::services::AccountService;
use crate::storage::LedgerRepository;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Add an account
    Add {
        /// Account name
        name: String,
        /// Account type (free-form, e.g. CASH, BANK, CREDIT); defaults to the configured type
        #[arg(short = 't', long = "type")]
        account_type: Option<String>,
    },
    /// List all accounts
    List,
}

/// Handle an account command
pub fn handle_account_command(
    repo: &dyn LedgerRepository,
    settings: &Settings,
    cmd: AccountCommands,
) -> TrackerResult<()> {
    let service = AccountService::new(repo);

    match cmd {
        AccountCommands::Add { name, account_type } => {
            let requested = account_type.unwrap_or_else(|| settings.default_account_type.clone());
            let existed = service.get(name.trim())?.is_some();
            let account = service.create(&name, &requested)?;

            if existed {
                println!("Account already exists: {}", account);
            } else {
                println!("Created account: {}", account);
            }
        }

        AccountCommands::List => {
            print!("{}", format_account_list(&service.list()?));
        }
    }

    Ok(())
}
